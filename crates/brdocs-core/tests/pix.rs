use brdocs_core::pix_copy_paste::parse_fields;
use brdocs_core::{Document, ErrorKind, PixCopyPaste, PixKey, PixKeyType};

const STONE: &str = "00020101021226820014br.gov.bcb.pix2560pix.stone.com.br/pix/v2/b411f5c8-e97f-4a18-af0e-fc66491748d7520400005303986540510.005802BR5925DIOGO DA SILVA SANTOS LTD6014RIO DE JANEIRO622905251e3afd7926983f8ffe086cdc16304FF60";

const MANUAL: &str = "00020126550014BR.GOV.BCB.PIX0123alexandrepato@gmail.com0206almoco5204000053039865406100.005802BR5914Alexandre Pato6009Ipanguacu61085950800062490511PIXJS76657250300017BR.GOV.BCB.BRCODE01051.0.0630455CF";

#[test]
fn key_types_are_detected_in_order() {
    let cases = [
        ("741.723.160-85", PixKeyType::Cpf, "74172316085"),
        ("11.222.333/0001-81", PixKeyType::Cnpj, "11222333000181"),
        (
            "123E4567-E89B-42D3-A456-426614174000",
            PixKeyType::Evp,
            "123e4567-e89b-42d3-a456-426614174000",
        ),
        ("Fulano@Example.com", PixKeyType::Email, "fulano@example.com"),
        ("+55 11 98765-4321", PixKeyType::Phone, "+5511987654321"),
    ];
    for (input, key_type, normalized) in cases {
        let key = PixKey::parse(input).unwrap();
        assert_eq!(key.key_type(), key_type, "{input}");
        assert_eq!(key.value(), normalized);
    }
}

#[test]
fn eleven_digits_that_fail_cpf_fall_through_to_phone() {
    let key = PixKey::parse("11987654321").unwrap();
    assert_eq!(key.key_type(), PixKeyType::Phone);
    assert_eq!(key.value(), "+5511987654321");
}

#[test]
fn random_keys_need_hyphens() {
    let err = PixKey::parse("123e4567e89b42d3a456426614174000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert!(!PixKey::validate("123e4567-e89b42d3-a456-426614174000"));
}

#[test]
fn unknown_keys_are_rejected() {
    assert_eq!(PixKey::parse("").unwrap_err().kind(), ErrorKind::EmptyValue);
    assert_eq!(
        PixKey::parse("not a key").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
    assert!(!PixKey::validate("741.723.160-86"));
}

#[test]
fn pix_keys_have_no_checksum() {
    assert_eq!(
        PixKey::checksum("74172316085").unwrap_err().kind(),
        ErrorKind::NoChecksum
    );
}

#[test]
fn copy_paste_accepts_real_payloads() {
    let stone = PixCopyPaste::parse(STONE).unwrap();
    assert_eq!(stone.crc(), "FF60");
    assert_eq!(stone.amount(), Some("10.00"));
    assert_eq!(stone.merchant_name(), Some("DIOGO DA SILVA SANTOS LTD"));
    assert_eq!(stone.merchant_city(), Some("RIO DE JANEIRO"));

    let manual = PixCopyPaste::parse(MANUAL).unwrap();
    assert_eq!(manual.crc(), "55CF");
    assert_eq!(manual.amount(), Some("100.00"));
    assert_eq!(manual.merchant_name(), Some("Alexandre Pato"));
    let tags: Vec<&str> = manual.fields().iter().map(|field| field.tag.as_str()).collect();
    assert_eq!(
        tags,
        ["00", "26", "52", "53", "54", "58", "59", "60", "61", "62", "63"]
    );
}

#[test]
fn copy_paste_checksum_is_crc16() {
    let body = &STONE[..STONE.len() - 4];
    assert_eq!(PixCopyPaste::checksum(body).unwrap(), "FF60");
    assert_eq!(
        PixCopyPaste::checksum("").unwrap_err().kind(),
        ErrorKind::EmptyValue
    );
}

#[test]
fn copy_paste_crc_is_case_insensitive() {
    let lowercase = format!("{}ff60", &STONE[..STONE.len() - 4]);
    assert!(PixCopyPaste::validate(&lowercase));
}

#[test]
fn tampered_payloads_fail_the_crc() {
    let tampered = STONE.replace("10.00", "99.00");
    assert_eq!(
        PixCopyPaste::parse(&tampered).unwrap_err().kind(),
        ErrorKind::InvalidChecksum
    );

    let wrong_crc = format!("{}0000", &STONE[..STONE.len() - 4]);
    assert_eq!(
        PixCopyPaste::parse(&wrong_crc).unwrap_err().kind(),
        ErrorKind::InvalidChecksum
    );
}

#[test]
fn malformed_payloads_are_rejected() {
    assert_eq!(
        PixCopyPaste::parse("  ").unwrap_err().kind(),
        ErrorKind::EmptyValue
    );
    assert_eq!(
        PixCopyPaste::parse("ABC").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
}

#[test]
fn single_field_values_get_children() {
    let stone = PixCopyPaste::parse(STONE).unwrap();

    let additional = stone.field("62").unwrap();
    assert_eq!(additional.children.len(), 1);
    assert_eq!(additional.children[0].tag, "05");
    assert_eq!(additional.children[0].value, "1e3afd7926983f8ffe086cdc1");

    let account = stone.field("26").unwrap();
    assert!(account.children.is_empty());
}

#[test]
fn fields_split_on_declared_lengths() {
    let fields = parse_fields("0002AB0103xyz").unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].tag, "00");
    assert_eq!(fields[0].length, 2);
    assert_eq!(fields[0].value, "AB");
    assert_eq!(fields[1].value, "xyz");

    assert!(parse_fields("").unwrap().is_empty());
    assert_eq!(
        parse_fields("0005AB").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
    assert_eq!(
        parse_fields("XX02AB").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
}
