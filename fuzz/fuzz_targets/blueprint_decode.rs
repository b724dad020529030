use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(wire) = std::str::from_utf8(data) {
                let _ = tessera::decompress_with_limit(wire, 1 << 16);
            }
        });
    }
}
