use polysave::{
    container::{self, ContainerHeader, SizeFieldWidth},
    ErrorCategory, ErrorKind,
};
use quickcheck_macros::quickcheck;
use rstest::*;

fn repetitive(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 7) as u8).collect()
}

/// Bytes an LZ4 block can't find matches in
fn noise(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

/// Frames an LZ4 block with a header that container::compress wouldn't choose
fn frame(marker: u8, size_difference: &[u8], data: &[u8]) -> Vec<u8> {
    let mut file = vec![marker];
    file.extend_from_slice(size_difference);
    file.extend_from_slice(&lz4_flex::block::compress(data));
    file
}

#[rstest]
#[case(1, SizeFieldWidth::Short)]
#[case(1000, SizeFieldWidth::Short)]
#[case(65535, SizeFieldWidth::Short)]
#[case(65536, SizeFieldWidth::Long)]
#[case(200_000, SizeFieldWidth::Long)]
fn test_field_width_follows_decompressed_len(
    #[case] len: usize,
    #[case] expected: SizeFieldWidth,
) {
    let data = repetitive(len);
    let file = container::compress(&data);
    assert_eq!(file[0], expected.marker());

    let header = ContainerHeader::from_slice(&file).unwrap();
    assert_eq!(header.width(), expected);
    assert_eq!(container::decompress(&file).unwrap(), data);
}

#[test]
fn test_short_field_with_large_output() {
    let mut data = vec![0u8; 10_000];
    data.extend(noise(60_000));
    let payload_len = lz4_flex::block::compress(&data).len();
    let diff = u16::try_from(data.len() - payload_len).unwrap();

    let file = frame(0x80, &diff.to_le_bytes(), &data);
    let header = ContainerHeader::from_slice(&file).unwrap();
    assert_eq!(header.width(), SizeFieldWidth::Short);
    assert_eq!(header.decompressed_len(file.len()), 70_000);
    assert_eq!(container::decompress(&file).unwrap(), data);
}

#[test]
fn test_long_field_with_small_output() {
    let data = repetitive(100);
    let payload_len = lz4_flex::block::compress(&data).len();
    let diff = (data.len() - payload_len) as u32;

    let file = frame(0xc0, &diff.to_le_bytes(), &data);
    let header = ContainerHeader::from_slice(&file).unwrap();
    assert_eq!(header.decompressed_len(file.len()), 100);
    assert_eq!(container::decompress(&file).unwrap(), data);
}

#[rstest]
#[case(0x80, SizeFieldWidth::Short)]
#[case(0xc0, SizeFieldWidth::Long)]
fn test_negative_difference(#[case] marker: u8, #[case] width: SizeFieldWidth) {
    let data = noise(256);
    let payload_len = lz4_flex::block::compress(&data).len();
    assert!(payload_len > data.len());

    let diff = (data.len() as u32).wrapping_sub(payload_len as u32);
    let diff = &diff.to_le_bytes()[..width.field_len()];
    let file = frame(marker, diff, &data);
    assert_eq!(container::decompress(&file).unwrap(), data);
}

#[test]
fn test_size_difference_is_stored() {
    let data = repetitive(4096);
    let file = container::compress(&data);
    let header = ContainerHeader::from_slice(&file).unwrap();
    let payload_len = file.len() - header.header_len();
    assert_eq!(header.size_difference() as usize, data.len() - payload_len);
}

#[test]
fn test_wrong_size_difference() {
    let data = repetitive(4096);
    let mut file = container::compress(&data);

    // claim the block decompresses to no more than its own length
    file[1] = 0;
    file[2] = 0;

    let err = container::decompress(&file).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::MalformedContainer);
    assert!(matches!(err.kind(), ErrorKind::Decompress { .. }));
}

#[rstest]
#[case(&[])]
#[case(&[0x80])]
#[case(&[0xc0, 0x00, 0x00])]
fn test_truncated_container(#[case] data: &[u8]) {
    let err = container::decompress(data).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::OutOfBounds);
}

#[rstest]
#[case(0x00, 0)]
#[case(0x7f, 1)]
fn test_unknown_selector(#[case] marker: u8, #[case] selector: u8) {
    let err = container::decompress(&[marker, 0, 0, 0]).unwrap_err();
    match err.kind() {
        ErrorKind::MalformedContainer { selector: actual } => assert_eq!(*actual, selector),
        x => panic!("unexpected error: {:?}", x),
    }
}

#[quickcheck]
fn decompress_never_panics(data: Vec<u8>) -> bool {
    let _ = container::decompress(&data);
    true
}
