use crate::models::enums::{BedStatus, Gender, PaymentMode, RoomType, TransactionType};

/// Outcome of canonicalizing one enum field. `coerced` is true whenever the
/// stored value will differ from what the source carried — including pure
/// case fixes — so every substitution surfaces in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coercion<T> {
    pub value: T,
    pub coerced: bool,
}

/// An enum field with a fixed whitelist, a documented fallback, and the
/// spellings the drifted stores are known to produce for it.
pub trait CanonicalEnum: Copy + 'static {
    const FIELD: &'static str;

    fn fallback() -> Self;
    fn variants() -> &'static [Self];
    fn canonical(&self) -> &'static str;
    fn aliases() -> &'static [(&'static str, Self)] {
        &[]
    }
}

/// Case-, whitespace- and hyphen-insensitive match against the whitelist and
/// alias table; anything unmapped becomes the field's documented fallback.
/// Lossy by policy, never silent: the caller counts every coercion.
pub fn normalize<T: CanonicalEnum>(raw: Option<&str>) -> Coercion<T> {
    let Some(raw) = raw else {
        return Coercion { value: T::fallback(), coerced: true };
    };

    let folded = fold(raw);
    if let Some(v) = T::variants().iter().find(|v| v.canonical() == folded) {
        return Coercion { value: *v, coerced: raw != v.canonical() };
    }
    if let Some((_, v)) = T::aliases().iter().find(|(alias, _)| *alias == folded) {
        return Coercion { value: *v, coerced: true };
    }
    Coercion { value: T::fallback(), coerced: true }
}

/// True when the raw value is already the exact canonical spelling — the
/// only case the validator lets through without a repair.
pub fn is_canonical<T: CanonicalEnum>(raw: Option<&str>) -> bool {
    raw.is_some_and(|s| T::variants().iter().any(|v| v.canonical() == s))
}

fn fold(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

impl CanonicalEnum for Gender {
    const FIELD: &'static str = "gender";

    fn fallback() -> Self {
        Gender::Other
    }
    fn variants() -> &'static [Self] {
        Gender::ALL
    }
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
    fn aliases() -> &'static [(&'static str, Self)] {
        &[
            ("m", Gender::Male),
            ("f", Gender::Female),
            ("o", Gender::Other),
            ("unknown", Gender::Other),
        ]
    }
}

impl CanonicalEnum for TransactionType {
    const FIELD: &'static str = "transaction_type";

    fn fallback() -> Self {
        TransactionType::Consultation
    }
    fn variants() -> &'static [Self] {
        TransactionType::ALL
    }
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
    fn aliases() -> &'static [(&'static str, Self)] {
        &[
            ("opd", TransactionType::Consultation),
            ("entry", TransactionType::EntryFee),
            ("registration", TransactionType::EntryFee),
            ("pharmacy", TransactionType::Medicine),
            ("lab", TransactionType::LabTest),
            ("xray", TransactionType::Imaging),
            ("x_ray", TransactionType::Imaging),
            ("scan", TransactionType::Imaging),
            ("surgery", TransactionType::Procedure),
        ]
    }
}

impl CanonicalEnum for PaymentMode {
    const FIELD: &'static str = "payment_mode";

    fn fallback() -> Self {
        PaymentMode::Cash
    }
    fn variants() -> &'static [Self] {
        PaymentMode::ALL
    }
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
    fn aliases() -> &'static [(&'static str, Self)] {
        &[
            ("netbanking", PaymentMode::Online),
            ("net_banking", PaymentMode::Online),
            ("gpay", PaymentMode::Upi),
            ("phonepe", PaymentMode::Upi),
            ("paytm", PaymentMode::Upi),
            ("credit_card", PaymentMode::Card),
            ("debit_card", PaymentMode::Card),
            ("waiver", PaymentMode::Adjustment),
        ]
    }
}

impl CanonicalEnum for RoomType {
    const FIELD: &'static str = "room_type";

    fn fallback() -> Self {
        RoomType::General
    }
    fn variants() -> &'static [Self] {
        RoomType::ALL
    }
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
    fn aliases() -> &'static [(&'static str, Self)] {
        &[
            ("ward", RoomType::General),
            ("semi", RoomType::SemiPrivate),
            ("deluxe", RoomType::Private),
            ("intensive_care", RoomType::Icu),
            ("casualty", RoomType::Emergency),
        ]
    }
}

impl CanonicalEnum for BedStatus {
    const FIELD: &'static str = "status";

    fn fallback() -> Self {
        BedStatus::Available
    }
    fn variants() -> &'static [Self] {
        BedStatus::ALL
    }
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
    fn aliases() -> &'static [(&'static str, Self)] {
        &[
            ("vacant", BedStatus::Available),
            ("free", BedStatus::Available),
            ("under_maintenance", BedStatus::Maintenance),
            ("booked", BedStatus::Reserved),
        ]
    }
}
