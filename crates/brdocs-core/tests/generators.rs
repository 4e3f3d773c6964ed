use brdocs_core::{
    Boleto, BoletoFakeOptions, CarPlate, CarPlateFakeOptions, CbiSinter, Cep, CepFakeOptions,
    Certidao, CertidaoFakeOptions, Cnh, Cnpj, CnpjFakeOptions, Cpf, CpfFakeOptions, Document,
    Email, ErrorKind, JudicialProcess, JudicialProcessFakeOptions, Nup17, Phone,
    PhoneFakeOptions, Pis, PixCopyPaste, PixCopyPasteFakeOptions, PixKey, PixKeyFakeOptions,
    PixKeyType, PostalTrackCode, Renavam, TituloEleitor, Uf, Uuid,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_round_trip<D: Document + PartialEq + std::fmt::Debug>(document: &D) {
    assert!(D::validate(document.value()), "{} {:?}", D::NAME, document);
    assert_eq!(&D::parse(document.value()).unwrap(), document);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn every_fake_validates(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);

        assert_round_trip(&Cpf::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Cnpj::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Cnh::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&Renavam::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&TituloEleitor::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&Pis::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&PostalTrackCode::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&JudicialProcess::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Nup17::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&CbiSinter::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&Certidao::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&CarPlate::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Phone::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Cep::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Uuid::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&Email::fake_with(&mut rng, &()).unwrap());
        assert_round_trip(&PixKey::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&PixCopyPaste::fake_with(&mut rng, &Default::default()).unwrap());
        assert_round_trip(&Boleto::fake_with(&mut rng, &Default::default()).unwrap());
    }

    #[test]
    fn alphanumeric_cnpj_fakes_validate(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = CnpjFakeOptions { alphanumeric: true };
        let cnpj = Cnpj::fake_with(&mut rng, &options).unwrap();
        assert_round_trip(&cnpj);
        prop_assert!(cnpj.value()[12..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn default_judicial_origin_is_never_zero(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let process = JudicialProcess::fake_with(&mut rng, &Default::default()).unwrap();
        prop_assert_ne!(process.origin(), "0000");
    }

    #[test]
    fn cep_fakes_stay_in_state(seed in any::<u64>(), index in 0usize..27) {
        let mut rng = StdRng::seed_from_u64(seed);
        let uf = Uf::ALL[index];
        let cep = Cep::fake_with(&mut rng, &CepFakeOptions { uf: Some(uf) }).unwrap();
        prop_assert_eq!(cep.state().unwrap(), uf);
    }

    #[test]
    fn pix_key_fakes_keep_their_type(seed in any::<u64>(), index in 0usize..5) {
        let mut rng = StdRng::seed_from_u64(seed);
        let key_type = PixKeyType::ALL[index];
        let options = PixKeyFakeOptions { key_type: Some(key_type) };
        let key = PixKey::fake_with(&mut rng, &options).unwrap();
        prop_assert_eq!(key.key_type(), key_type);
    }
}

#[test]
fn same_seed_same_document() {
    let first = Cpf::fake_with(&mut StdRng::seed_from_u64(7), &Default::default()).unwrap();
    let second = Cpf::fake_with(&mut StdRng::seed_from_u64(7), &Default::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn thread_rng_fakes_validate() {
    assert!(Cpf::validate(Cpf::fake(&Default::default()).unwrap().value()));
    assert!(Cnh::validate(Cnh::fake(&()).unwrap().value()));
    assert!(Boleto::validate(Boleto::fake(&Default::default()).unwrap().value()));
}

#[test]
fn cpf_fake_honors_fiscal_region() {
    let mut rng = StdRng::seed_from_u64(1);
    let options = CpfFakeOptions {
        fiscal_region: Some(8),
    };
    let cpf = Cpf::fake_with(&mut rng, &options).unwrap();
    assert_eq!(cpf.fiscal_region(), 8);
    assert_eq!(cpf.issuing_states(), &[Uf::SP]);

    let options = CpfFakeOptions {
        fiscal_region: Some(10),
    };
    let err = Cpf::fake_with(&mut rng, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}

#[test]
fn plate_fake_honors_format() {
    let mut rng = StdRng::seed_from_u64(2);
    for mercosul in [true, false] {
        let options = CarPlateFakeOptions {
            mercosul: Some(mercosul),
        };
        let plate = CarPlate::fake_with(&mut rng, &options).unwrap();
        assert_eq!(plate.is_mercosul(), mercosul);
    }
}

#[test]
fn phone_fake_honors_options() {
    let mut rng = StdRng::seed_from_u64(3);
    let mobile = PhoneFakeOptions {
        ddd: Some("84".into()),
        is_mobile: true,
        is_landline: false,
    };
    let phone = Phone::fake_with(&mut rng, &mobile).unwrap();
    assert_eq!(phone.ddd(), "84");
    assert!(phone.is_mobile());

    let landline = PhoneFakeOptions {
        is_landline: true,
        ..Default::default()
    };
    assert!(!Phone::fake_with(&mut rng, &landline).unwrap().is_mobile());

    let unknown = PhoneFakeOptions {
        ddd: Some("20".into()),
        ..Default::default()
    };
    let err = Phone::fake_with(&mut rng, &unknown).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn judicial_process_fake_honors_components() {
    let mut rng = StdRng::seed_from_u64(4);
    let options = JudicialProcessFakeOptions {
        court: Some("8".into()),
        sub_court: Some("13".into()),
        year: Some("2009".into()),
        origin: Some("0024".into()),
    };
    let process = JudicialProcess::fake_with(&mut rng, &options).unwrap();
    assert_eq!(process.court(), "8");
    assert_eq!(process.sub_court(), "13");
    assert_eq!(process.year(), "2009");
    assert_eq!(process.origin(), "0024");

    for bad in [
        JudicialProcessFakeOptions {
            court: Some("0".into()),
            ..Default::default()
        },
        JudicialProcessFakeOptions {
            sub_court: Some("00".into()),
            ..Default::default()
        },
        JudicialProcessFakeOptions {
            year: Some("99".into()),
            ..Default::default()
        },
        JudicialProcessFakeOptions {
            origin: Some("0000".into()),
            ..Default::default()
        },
    ] {
        let err = JudicialProcess::fake_with(&mut rng, &bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }
}

#[test]
fn certidao_fake_honors_components() {
    let mut rng = StdRng::seed_from_u64(5);
    let options = CertidaoFakeOptions {
        cns: Some("104539".into()),
        year: Some(2013),
        book: Some(12),
        page: Some(21),
        term: Some(123),
        ..Default::default()
    };
    let certidao = Certidao::fake_with(&mut rng, &options).unwrap();
    assert_eq!(certidao.value(), "10453901552013100012021000012392");

    let options = CertidaoFakeOptions {
        page: Some(1000),
        ..Default::default()
    };
    let err = Certidao::fake_with(&mut rng, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}

#[test]
fn boleto_fake_honors_components() {
    let mut rng = StdRng::seed_from_u64(6);
    let options = BoletoFakeOptions {
        bank: Some("077".into()),
        amount_cents: Some(15130),
        expiration_factor: Some(9002),
    };
    let boleto = Boleto::fake_with(&mut rng, &options).unwrap();
    assert_eq!(boleto.bank(), "077");
    assert_eq!(boleto.amount_cents(), 15130);
    assert_eq!(boleto.expiration_factor(), "9002");

    let options = BoletoFakeOptions {
        bank: Some("77".into()),
        ..Default::default()
    };
    let err = Boleto::fake_with(&mut rng, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}

#[test]
fn pix_copy_paste_fake_honors_options() {
    let mut rng = StdRng::seed_from_u64(7);
    let options = PixCopyPasteFakeOptions {
        key: Some("741.723.160-85".into()),
        amount: Some("10.00".into()),
        merchant_name: Some("Fulano".into()),
        merchant_city: Some("Natal".into()),
    };
    let payload = PixCopyPaste::fake_with(&mut rng, &options).unwrap();
    assert_eq!(payload.amount(), Some("10.00"));
    assert_eq!(payload.merchant_name(), Some("Fulano"));
    assert_eq!(payload.merchant_city(), Some("Natal"));
    assert!(payload.value().contains("74172316085"));

    let options = PixCopyPasteFakeOptions {
        merchant_city: Some("Sao Jose dos Campos".into()),
        ..Default::default()
    };
    let err = PixCopyPaste::fake_with(&mut rng, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}
