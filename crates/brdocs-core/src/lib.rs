//! Validators, check digit calculators, masks and fake generators for
//! Brazilian documents.
//!
//! Every document type implements [`Document`]:
//! - `parse` normalizes the raw input and verifies it, producing an immutable value
//! - `validate` / `validate_or_fail` answer the same question without keeping the value
//! - `checksum` computes check digits for a prefix
//! - `mask` renders the normalized value for display
//! - `fake` / `fake_with` generate random valid documents
//!
//! Core invariants:
//! - A document value always holds its normalized form with verified check digits
//! - Parsing is all-or-nothing; the first failing rule is reported
//! - Nothing is cached or shared besides compiled regular expressions
//!
#![deny(missing_docs)]

/// Shared document contract and newtype plumbing.
pub mod document;

/// Bank slip barcode and typed line.
pub mod boleto;
/// Vehicle plates, old and Mercosul formats.
pub mod car_plate;
/// CIB real estate code from SINTER.
pub mod cbi_sinter;
/// Postal codes and their state ranges.
pub mod cep;
/// Civil registry certificate numbers.
pub mod certidao;
/// Driver's license numbers.
pub mod cnh;
/// Company taxpayer numbers, numeric and alphanumeric.
pub mod cnpj;
/// Individual taxpayer numbers.
pub mod cpf;
/// E-mail addresses accepted as Pix keys.
pub mod email;
/// CNJ judicial process numbers.
pub mod judicial_process;
/// Federal protocol numbers (NUP).
pub mod nup17;
/// Phone numbers with area code.
pub mod phone;
/// PIS/PASEP social security numbers.
pub mod pis;
/// Pix copy-and-paste payloads.
pub mod pix_copy_paste;
/// Pix keys of every type.
pub mod pix_key;
/// Correios tracking codes.
pub mod postal_track_code;
/// Vehicle registry numbers.
pub mod renavam;
/// Voter registration numbers.
pub mod titulo_eleitor;
/// Federative units.
pub mod uf;
/// Version 4 UUIDs.
pub mod uuid;

pub use self::boleto::{Boleto, BoletoFakeOptions};
pub use self::car_plate::{CarPlate, CarPlateFakeOptions};
pub use self::cbi_sinter::CbiSinter;
pub use self::cep::{Cep, CepFakeOptions};
pub use self::certidao::{BookType, Certidao, CertidaoFakeOptions, RegistryService};
pub use self::cnh::Cnh;
pub use self::cnpj::{Cnpj, CnpjFakeOptions};
pub use self::cpf::{Cpf, CpfFakeOptions};
pub use self::document::Document;
pub use self::email::Email;
pub use self::judicial_process::{JudicialProcess, JudicialProcessFakeOptions};
pub use self::nup17::Nup17;
pub use self::phone::{Phone, PhoneFakeOptions};
pub use self::pis::Pis;
pub use self::pix_copy_paste::{PixCopyPaste, PixCopyPasteFakeOptions, PixField};
pub use self::pix_key::{PixKey, PixKeyFakeOptions, PixKeyType};
pub use self::postal_track_code::PostalTrackCode;
pub use self::renavam::Renavam;
pub use self::titulo_eleitor::TituloEleitor;
pub use self::uf::Uf;
pub use self::uuid::Uuid;

pub use brdocs_canonical::{ErrorKind, FitPolicy, ValidationError};
