use brdocs_core::{
    BookType, CarPlate, CbiSinter, Cep, Certidao, Cnh, Cnpj, Cpf, Document, Email, ErrorKind,
    JudicialProcess, Nup17, Phone, Pis, PostalTrackCode, RegistryService, Renavam, TituloEleitor,
    Uf, Uuid, ValidationError,
};

#[test]
fn cpf_check_digits() {
    assert_eq!(Cpf::checksum("741723160").unwrap(), "85");
    assert_eq!(Cpf::checksum("529982247").unwrap(), "25");
    assert_eq!(Cpf::checksum("004129620").unwrap(), "63");
}

#[test]
fn cpf_parses_masked_and_plain_input() {
    let cpf = Cpf::parse("741.723.160-85").unwrap();
    assert_eq!(cpf.value(), "74172316085");
    assert_eq!(Cpf::parse("74172316085").unwrap(), cpf);
    assert_eq!(cpf.fiscal_region(), 0);
    assert_eq!(cpf.issuing_states(), &[Uf::RS]);

    let cpf = Cpf::parse("529.982.247-25").unwrap();
    assert_eq!(cpf.fiscal_region(), 7);
    assert!(cpf.issuing_states().contains(&Uf::RJ));
}

#[test]
fn cpf_keeps_leading_zeros() {
    assert_eq!(Cpf::parse("004.129.620-63").unwrap().value(), "00412962063");
}

#[test]
fn cpf_rejections_report_their_kind() {
    let kind = |value: &str| Cpf::parse(value).unwrap_err().kind();

    assert_eq!(kind(""), ErrorKind::EmptyValue);
    assert_eq!(kind("   "), ErrorKind::EmptyValue);
    assert_eq!(kind("741.723.160-8a"), ErrorKind::InvalidFormat);
    assert_eq!(kind("7417231608"), ErrorKind::TooShort);
    assert_eq!(kind("741723160851"), ErrorKind::TooLong);
    assert_eq!(kind("111.111.111-11"), ErrorKind::RepeatedSequence);
    assert_eq!(kind("741.723.160-86"), ErrorKind::InvalidChecksum);
}

#[test]
fn validate_never_fails() {
    assert!(Cpf::validate("741.723.160-85"));
    assert!(!Cpf::validate(""));
    assert!(!Cpf::validate("not a document"));
    assert!(Cpf::validate_or_fail("741.723.160-85").is_ok());
}

#[test]
fn checksum_rejects_bad_prefixes() {
    assert_eq!(Cpf::checksum("").unwrap_err().kind(), ErrorKind::EmptyValue);
    assert_eq!(
        Cpf::checksum("74172316").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
    assert_eq!(
        Cpf::checksum("74172316a").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
}

#[test]
fn cnpj_numeric() {
    assert_eq!(Cnpj::checksum("112223330001").unwrap(), "81");
    assert_eq!(Cnpj::checksum("413565810001").unwrap(), "86");

    let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
    assert_eq!(cnpj.value(), "11222333000181");
    assert_eq!(cnpj.root(), "11222333");
    assert_eq!(cnpj.branch(), "0001");
    assert!(!cnpj.is_alphanumeric());
}

#[test]
fn cnpj_alphanumeric() {
    assert_eq!(Cnpj::checksum("12ABC34501DE").unwrap(), "35");
    assert_eq!(Cnpj::checksum("A12223330001").unwrap(), "50");

    let cnpj = Cnpj::parse("12.abc.345/01de-35").unwrap();
    assert_eq!(cnpj.value(), "12ABC34501DE35");
    assert!(cnpj.is_alphanumeric());
    assert_eq!(cnpj.root(), "12ABC345");
}

#[test]
fn cnpj_rejections() {
    let kind = |value: &str| Cnpj::parse(value).unwrap_err().kind();

    assert_eq!(kind("00.000.000/0000-00"), ErrorKind::RepeatedSequence);
    assert_eq!(kind("11.222.333/0001-82"), ErrorKind::InvalidChecksum);
    assert_eq!(kind("12ABC34501DE3A"), ErrorKind::InvalidFormat);
    assert_eq!(kind("11.222.333/0001"), ErrorKind::TooShort);
    assert_eq!(kind("11.222.333/0001-8#"), ErrorKind::InvalidFormat);
}

#[test]
fn cnh_renavam_and_pis() {
    assert_eq!(Cnh::checksum("501954711").unwrap(), "65");
    assert_eq!(Cnh::parse("50195471165").unwrap().value(), "50195471165");
    assert_eq!(
        Cnh::parse("50195471166").unwrap_err().kind(),
        ErrorKind::InvalidChecksum
    );

    assert_eq!(Renavam::checksum("2682764996").unwrap(), "0");
    assert_eq!(Renavam::parse("2682764996-0").unwrap().value(), "26827649960");

    assert_eq!(Pis::checksum("7128267738").unwrap(), "0");
    assert_eq!(Pis::parse("712.82677.38-0").unwrap().value(), "71282677380");
}

#[test]
fn titulo_eleitor() {
    assert_eq!(TituloEleitor::checksum("1023850106").unwrap(), "71");

    let titulo = TituloEleitor::parse("1023.8501.0671").unwrap();
    assert_eq!(titulo.uf_code(), "06");
    assert_eq!(titulo.state(), Some(Uf::PR));
    assert!(!titulo.is_abroad());
    assert_eq!(
        TituloEleitor::parse("102385010672").unwrap_err().kind(),
        ErrorKind::InvalidChecksum
    );
}

#[test]
fn postal_track_code() {
    assert_eq!(PostalTrackCode::checksum("71825242").unwrap(), "3");

    let code = PostalTrackCode::parse("ss718252423br").unwrap();
    assert_eq!(code.value(), "SS718252423BR");
    assert_eq!(code.service(), "SS");
    assert_eq!(code.number(), "71825242");
    assert_eq!(code.country(), "BR");

    assert_eq!(
        PostalTrackCode::parse("SS718252424BR").unwrap_err().kind(),
        ErrorKind::InvalidChecksum
    );
    assert_eq!(
        PostalTrackCode::parse("S1718252423BR").unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
}

#[test]
fn nup17() {
    assert_eq!(Nup17::checksum("230370014622021").unwrap(), "65");

    let nup = Nup17::parse("23037.001462/2021-65").unwrap();
    assert_eq!(nup.value(), "23037001462202165");
    assert_eq!(nup.agency(), "23037");
    assert_eq!(nup.sequence(), "001462");
    assert_eq!(nup.year(), "2021");
}

#[test]
fn cbi_sinter_folds_lookalike_letters() {
    assert_eq!(CbiSinter::checksum("A3N8Z4F").unwrap(), "Y");
    assert_eq!(CbiSinter::parse("a3n8z4f-y").unwrap().value(), "A3N8Z4FY");
    assert_eq!(
        CbiSinter::parse("A3N8Z4FZ").unwrap_err().kind(),
        ErrorKind::InvalidChecksum
    );
}

#[test]
fn judicial_process() {
    assert_eq!(JudicialProcess::checksum("000208020125150049").unwrap(), "25");

    let process = JudicialProcess::parse("6105283-83.2009.8.13.0024").unwrap();
    assert_eq!(process.value(), "61052838320098130024");
    assert_eq!(process.process_number(), "6105283");
    assert_eq!(process.check_digits(), "83");
    assert_eq!(process.year(), "2009");
    assert_eq!(process.court(), "8");
    assert_eq!(process.sub_court(), "13");
    assert_eq!(process.origin(), "0024");

    for valid in [
        "00020802520125150049",
        "00110060720168200100",
        "08002785520134058400",
        "08002732820164058400",
    ] {
        assert!(JudicialProcess::validate(valid), "{valid}");
    }
}

#[test]
fn judicial_process_rejects_court_zero() {
    let err = JudicialProcess::parse("00020802520120150049").unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfBounds {
            field: "court",
            value: "0".into()
        }
    );
}

#[test]
fn certidao() {
    let certidao = Certidao::parse("104539 01 55 2013 1 00012 021 0000123 92").unwrap();
    assert_eq!(certidao.value(), "10453901552013100012021000012392");
    assert_eq!(certidao.cns(), "104539");
    assert_eq!(certidao.collection(), "01");
    assert_eq!(certidao.service(), Some(RegistryService::CivilRegistry));
    assert_eq!(certidao.year(), "2013");
    assert_eq!(certidao.book_type(), Some(BookType::Birth));
    assert_eq!(certidao.book(), "00012");
    assert_eq!(certidao.page(), "021");
    assert_eq!(certidao.term(), "0000123");
    assert_eq!(certidao.check_digits(), "92");

    assert!(Certidao::validate("00000001552024100001001000000114"));
    assert!(!Certidao::validate("10453901552013100012021000012393"));
}

#[test]
fn documents_without_check_digits_say_so() {
    for err in [
        Cep::checksum("01310").unwrap_err(),
        CarPlate::checksum("ABC").unwrap_err(),
        Email::checksum("a").unwrap_err(),
        Phone::checksum("11").unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::NoChecksum);
    }
}

/// Every single-digit substitution inside the first `prefix` positions of `valid`.
fn mutations(valid: &str, prefix: usize) -> Vec<String> {
    let mut out = Vec::new();
    for position in 0..prefix {
        for digit in b'0'..=b'9' {
            let mut bytes = valid.as_bytes().to_vec();
            if bytes[position] != digit {
                bytes[position] = digit;
                out.push(String::from_utf8(bytes).unwrap());
            }
        }
    }
    out
}

fn rejected<D: Document>(candidates: &[String]) -> usize {
    candidates.iter().filter(|value| !D::validate(value)).count()
}

#[test]
fn single_digit_changes_are_caught_by_two_digit_checks() {
    let cpf = mutations("74172316085", 9);
    assert_eq!(rejected::<Cpf>(&cpf), cpf.len());

    let cnpj = mutations("11222333000181", 12);
    assert_eq!(rejected::<Cnpj>(&cnpj), cnpj.len());

    let cnh = mutations("50195471165", 9);
    assert_eq!(rejected::<Cnh>(&cnh), cnh.len());

    let nup = mutations("23037001462202165", 15);
    assert_eq!(rejected::<Nup17>(&nup), nup.len());

    let titulo = mutations("102385010671", 10);
    assert_eq!(rejected::<TituloEleitor>(&titulo), titulo.len());
}

#[test]
fn single_digit_changes_mostly_caught_by_one_digit_checks() {
    let pis = mutations("71282677380", 10);
    assert!(rejected::<Pis>(&pis) * 10 >= pis.len() * 8);

    let renavam = mutations("26827649960", 10);
    assert!(rejected::<Renavam>(&renavam) * 10 >= renavam.len() * 8);
}

#[test]
fn repeated_sequences_are_rejected() {
    let kind = ErrorKind::RepeatedSequence;
    assert_eq!(Cpf::parse("11111111111").unwrap_err().kind(), kind);
    assert_eq!(Cnh::parse("11111111111").unwrap_err().kind(), kind);
    assert_eq!(Renavam::parse("11111111111").unwrap_err().kind(), kind);
    assert_eq!(Pis::parse("11111111111").unwrap_err().kind(), kind);
    assert_eq!(TituloEleitor::parse("111111111111").unwrap_err().kind(), kind);
    assert_eq!(Cnpj::parse("11111111111111").unwrap_err().kind(), kind);
}

#[test]
fn empty_input_is_reported_everywhere() {
    let empty = ErrorKind::EmptyValue;
    assert_eq!(Cnh::parse("").unwrap_err().kind(), empty);
    assert_eq!(Renavam::parse("").unwrap_err().kind(), empty);
    assert_eq!(TituloEleitor::parse("").unwrap_err().kind(), empty);
    assert_eq!(Pis::parse("").unwrap_err().kind(), empty);
    assert_eq!(PostalTrackCode::parse("").unwrap_err().kind(), empty);
    assert_eq!(JudicialProcess::parse("").unwrap_err().kind(), empty);
    assert_eq!(Nup17::parse("").unwrap_err().kind(), empty);
    assert_eq!(CbiSinter::parse("").unwrap_err().kind(), empty);
    assert_eq!(Certidao::parse("").unwrap_err().kind(), empty);
}

fn assert_invalid_format<D: Document>(value: &str) {
    match D::parse(value) {
        Err(err) => assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{} {value}", D::NAME),
        Ok(_) => panic!("{} accepted {value}", D::NAME),
    }
}

#[test]
fn shaped_documents_reject_non_ascii_digits_and_letters() {
    // Arabic-Indic digits and Latin-1 letters.
    assert_invalid_format::<Cep>("01310-\u{661}\u{660}\u{660}");
    assert_invalid_format::<Cep>("0131\u{e9}-100");

    assert_invalid_format::<Phone>("11 9\u{668}\u{667}\u{666}\u{665}\u{664}\u{663}\u{662}\u{661}");
    assert_invalid_format::<Phone>("11 9876\u{e9}4321");

    assert_invalid_format::<CarPlate>("ABC\u{661}234");
    assert_invalid_format::<CarPlate>("\u{c0}BC1234");

    assert_invalid_format::<PostalTrackCode>("SS71825242\u{663}BR");
    assert_invalid_format::<PostalTrackCode>("\u{c7}S718252423BR");

    assert_invalid_format::<Uuid>("123e4567-e89b-42d3-a456-42661417400\u{660}");
    assert_invalid_format::<Uuid>("123\u{e9}4567-e89b-42d3-a456-426614174000");

    assert_invalid_format::<Email>("fulano\u{661}@example.com");
    assert_invalid_format::<Email>("fulano@ex\u{e1}mple.com");
}
