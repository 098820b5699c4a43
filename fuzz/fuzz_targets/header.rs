use honggfuzz::fuzz;
use idx_reader::parse_header;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let mut input = data;
            if let Ok(header) = parse_header(&mut input) {
                assert_eq!(data.len() - input.len(), header.encoded_len());
                let _ = header.payload_len();
            }
        });
    }
}
