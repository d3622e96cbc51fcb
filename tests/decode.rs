use hex0::{
    avec::{self, encode::Canonical, slice, text},
    sans::{state::TruncatedByte, unit::Unit},
};
use tinyvec::ArrayVec;

const ELF_MAGIC: [u8; 4] = [0x7F, 0x45, 0x4C, 0x46];

fn decode_slice(r: &[u8]) -> Result<ArrayVec<[u8; 16]>, slice::Error> {
    avec::decode_slice(r).collect()
}

fn decode_str(r: &str) -> Result<ArrayVec<[u8; 16]>, text::Error> {
    avec::decode_str(r).collect()
}

#[test]
fn classify_units() {
    assert_eq!(Unit::from_byte(b'0'), Unit::Nibble(0));
    assert_eq!(Unit::from_byte(b'f'), Unit::Nibble(15));
    assert_eq!(Unit::from_byte(b'F'), Unit::Nibble(15));
    assert_eq!(Unit::from_byte(b';'), Unit::Comment);
    assert_eq!(Unit::from_byte(b'#'), Unit::Comment);
    assert_eq!(Unit::from_byte(b'g'), Unit::Filler);
    assert_eq!(Unit::from_byte(b'\n'), Unit::Filler);
    assert_eq!(Unit::from_byte(0xE2), Unit::Wide);
    assert_eq!(Unit::from_char('ⓢ'), Unit::Wide);
    assert_eq!(Unit::from_char('é'), Unit::Wide);
    assert_eq!(Unit::from_char('b'), Unit::Nibble(11));
    assert_eq!(Unit::from_char(' '), Unit::Filler);
}

#[test]
fn decode_every_pair() {
    const DIGITS: &[u8] = b"0123456789abcdefABCDEF";

    for &hi in DIGITS {
        for &lo in DIGITS {
            let hi_value = (hi as char).to_digit(16).unwrap();
            let lo_value = (lo as char).to_digit(16).unwrap();
            let expected = (16 * hi_value + lo_value) as u8;
            let out = decode_slice(&[hi, lo]).unwrap();
            assert_eq!(out.as_slice(), &[expected], "{}{}", hi as char, lo as char);
        }
    }
}

#[test]
fn decode_mixed_case() {
    assert_eq!(decode_slice(b"aB").unwrap().as_slice(), &[0xAB]);
    assert_eq!(decode_slice(b"Ab").unwrap().as_slice(), &[0xAB]);
    assert_eq!(decode_str("aB").unwrap().as_slice(), &[0xAB]);
}

#[test]
fn decode_ignores_formatting() {
    for input in ["AA BB", "AABB", "AA\n;comment\nBB", "A A\tB\r\nB", "A#x\nAB;y\nB"] {
        assert_eq!(decode_slice(input.as_bytes()).unwrap().as_slice(), &[0xAA, 0xBB], "{input:?}");
        assert_eq!(decode_str(input).unwrap().as_slice(), &[0xAA, 0xBB], "{input:?}");
    }
}

#[test]
fn decode_filler_only() {
    let input = "  xyz :lqx_zip\t~!@ ;note\n";
    assert!(decode_slice(input.as_bytes()).unwrap().is_empty());
    assert!(decode_str(input).unwrap().is_empty());
    assert!(decode_slice(b"").unwrap().is_empty());
}

#[test]
fn decode_skips_wide_characters() {
    assert_eq!(decode_slice("Aⓢb".as_bytes()).unwrap().as_slice(), &[0xAB]);
    assert_eq!(decode_slice(b"A\xFF\x80b").unwrap().as_slice(), &[0xAB]);
    assert_eq!(decode_str("Aⓢb").unwrap().as_slice(), &[0xAB]);
}

#[test]
fn decode_truncated_byte() {
    let mut bytes = avec::decode_slice(b"AABBC");
    assert_eq!(bytes.next(), Some(Ok(0xAA)));
    assert_eq!(bytes.next(), Some(Ok(0xBB)));
    assert_eq!(bytes.next(), Some(Err(slice::Error::TruncatedByte(TruncatedByte))));
    assert_eq!(bytes.next(), None);

    assert_eq!(
        decode_str("AABBC"),
        Err(text::Error::TruncatedByte(TruncatedByte))
    );
}

#[test]
fn decode_unterminated_comment() {
    let mut bytes = avec::decode_slice(b"AA ; no line break");
    assert_eq!(bytes.next(), Some(Ok(0xAA)));
    assert_eq!(bytes.next(), Some(Err(slice::Error::EndOfSlice)));
    assert_eq!(bytes.next(), None);

    assert_eq!(decode_str("A # no line break"), Err(text::Error::EndOfText));
}

#[test]
fn decode_next_byte_sessions_are_independent() {
    let mut source = slice::Slice::new(b"12 3");
    assert_eq!(avec::decode_next_byte(&mut source), Ok(Some(0x12)));
    assert_eq!(source.offset(), 2);
    assert_eq!(source.remaining(), b" 3");
    assert_eq!(
        avec::decode_next_byte(&mut source),
        Err(slice::Error::TruncatedByte(TruncatedByte))
    );
}

#[test]
fn peek_remaining_input() {
    let mut bytes = avec::decode_str("7f 45 ; magic\n4c");
    assert_eq!(bytes.next(), Some(Ok(0x7F)));
    assert_eq!(bytes.source().remaining(), " 45 ; magic\n4c");
    assert_eq!(bytes.next(), Some(Ok(0x45)));
    assert_eq!(bytes.next(), Some(Ok(0x4C)));
    assert_eq!(bytes.source().remaining(), "");
    assert_eq!(bytes.next(), None);
}

#[test]
fn decode_fixtures() {
    for path in ["fixtures/onlyhex.hex0", "fixtures/normal.hex0", "fixtures/chaotic.hex0"] {
        let data = std::fs::read(path).unwrap();
        assert_eq!(decode_slice(&data).unwrap().as_slice(), &ELF_MAGIC, "{path}");

        let data = std::fs::read_to_string(path).unwrap();
        assert_eq!(decode_str(&data).unwrap().as_slice(), &ELF_MAGIC, "{path}");
    }
}

#[test]
fn encode_canonical() {
    assert_eq!(Canonical(&ELF_MAGIC).to_string(), "7f 45 4c 46");
    assert_eq!(Canonical(&[]).to_string(), "");
    assert_eq!(Canonical(&[0x0A]).to_string(), "0a");
}

#[test]
fn encode_then_decode() {
    let all: Vec<u8> = (0..=u8::MAX).collect();
    let source = Canonical(&all).to_string();

    let decoded: Vec<u8> = avec::decode_str(&source).collect::<Result<_, _>>().unwrap();
    assert_eq!(decoded, all);
}
