use scriptbind::{NativeModule, native_module};

#[native_module]
pub mod audio {
    pub const CHANNELS: u8 = 2;

    pub enum Format {
        Wav,
        Ogg,
    }

    #[script(name = "play")]
    pub fn play_sound(id: u32, volume: f32) {
        let _ = (id, volume);
    }

    #[script(skip)]
    pub fn decode<T>(bytes: &[u8]) -> Option<T> {
        let _ = bytes;
        None
    }

    pub fn label(name: &str, owned: String) -> bool {
        name == owned
    }
}

fn main() {
    let decls = <audio::Exports as NativeModule>::declarations();
    assert_eq!(decls.len(), 4);
    assert_eq!(decls[2].name(), "play");
    let _ = audio::Format::Ogg;
    let _ = audio::decode::<u8>(&[]);
}
