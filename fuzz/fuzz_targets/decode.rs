use honggfuzz::fuzz;
use idx_reader::{decode, Config, Silent};

fn main() {
    let config = Config {
        allow_truncated: true,
        ..Config::default()
    };
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(idx) = decode(data, &config, Silent) {
                assert!(idx.len() <= idx.element_count());
            }
        });
    }
}
