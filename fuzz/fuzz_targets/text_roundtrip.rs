use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if text.chars().count() > 256 {
                    return;
                }
                let wire = tessera::compress(text).encode();
                assert_eq!(tessera::decompress(&wire).unwrap(), text);
            }
        });
    }
}
