use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// `ALL` lists every variant in declaration order for whitelist scans.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(TransactionType {
    EntryFee => "entry_fee",
    Consultation => "consultation",
    Service => "service",
    Admission => "admission",
    Medicine => "medicine",
    Discount => "discount",
    Refund => "refund",
    Procedure => "procedure",
    LabTest => "lab_test",
    Imaging => "imaging",
});

str_enum!(PaymentMode {
    Cash => "cash",
    Online => "online",
    Card => "card",
    Upi => "upi",
    Insurance => "insurance",
    Adjustment => "adjustment",
});

str_enum!(RoomType {
    General => "general",
    SemiPrivate => "semi_private",
    Private => "private",
    Icu => "icu",
    Emergency => "emergency",
});

str_enum!(BedStatus {
    Available => "available",
    Occupied => "occupied",
    Maintenance => "maintenance",
    Reserved => "reserved",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn transaction_type_round_trip() {
        for (variant, s) in [
            (TransactionType::EntryFee, "entry_fee"),
            (TransactionType::Consultation, "consultation"),
            (TransactionType::Service, "service"),
            (TransactionType::Admission, "admission"),
            (TransactionType::Medicine, "medicine"),
            (TransactionType::Discount, "discount"),
            (TransactionType::Refund, "refund"),
            (TransactionType::Procedure, "procedure"),
            (TransactionType::LabTest, "lab_test"),
            (TransactionType::Imaging, "imaging"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TransactionType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn payment_mode_round_trip() {
        for (variant, s) in [
            (PaymentMode::Cash, "cash"),
            (PaymentMode::Online, "online"),
            (PaymentMode::Card, "card"),
            (PaymentMode::Upi, "upi"),
            (PaymentMode::Insurance, "insurance"),
            (PaymentMode::Adjustment, "adjustment"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(PaymentMode::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn bed_status_round_trip() {
        for (variant, s) in [
            (BedStatus::Available, "available"),
            (BedStatus::Occupied, "occupied"),
            (BedStatus::Maintenance, "maintenance"),
            (BedStatus::Reserved, "reserved"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(BedStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn all_lists_every_variant() {
        assert_eq!(Gender::ALL.len(), 3);
        assert_eq!(TransactionType::ALL.len(), 10);
        assert_eq!(PaymentMode::ALL.len(), 6);
        assert_eq!(RoomType::ALL.len(), 5);
        assert_eq!(BedStatus::ALL.len(), 4);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Gender::from_str("invalid").is_err());
        assert!(PaymentMode::from_str("CASH").is_err());
        assert!(BedStatus::from_str("").is_err());
    }
}
