use std::fmt;

/// Data type inferred for a column.
///
/// `Null` is the "no signal" element of the merge lattice: it is what an empty
/// value classifies as, and it never appears in a finished column type list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Empty value; carries no type information.
    Null,
    /// `true`/`false`, `yes`/`no`, `on`/`off` in any letter case.
    Boolean,
    /// Whole number fitting in 32 bits.
    Integer,
    /// Whole number fitting in 64 bits.
    Long,
    /// Whole number of arbitrary size.
    BigInteger,
    /// Finite 64-bit floating point number.
    Double,
    /// Decimal number of arbitrary precision.
    BigDecimal,
    /// Date with a time of day.
    DateTime,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Anything else (fallback type).
    #[default]
    String,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Null => write!(f, "Null"),
            Type::Boolean => write!(f, "Boolean"),
            Type::Integer => write!(f, "Integer"),
            Type::Long => write!(f, "Long"),
            Type::BigInteger => write!(f, "BigInteger"),
            Type::Double => write!(f, "Double"),
            Type::BigDecimal => write!(f, "BigDecimal"),
            Type::DateTime => write!(f, "DateTime"),
            Type::Date => write!(f, "Date"),
            Type::Time => write!(f, "Time"),
            Type::String => write!(f, "String"),
        }
    }
}

impl Type {
    /// Every variant, in declaration order.
    pub const ALL: [Type; 11] = [
        Type::Null,
        Type::Boolean,
        Type::Integer,
        Type::Long,
        Type::BigInteger,
        Type::Double,
        Type::BigDecimal,
        Type::DateTime,
        Type::Date,
        Type::Time,
        Type::String,
    ];

    /// Returns true if this type is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Type::Integer | Type::Long | Type::BigInteger | Type::Double | Type::BigDecimal
        )
    }

    /// Returns true if this type is temporal.
    #[inline]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Type::DateTime | Type::Date | Type::Time)
    }

    /// Fold one more observation into a column type.
    ///
    /// `String` absorbs everything and `Null` is the identity. Numbers widen
    /// along `Integer < Long < {BigInteger, Double} < BigDecimal`, where
    /// `BigInteger` and `Double` only meet at `BigDecimal`. Booleans and the
    /// temporal kinds only merge with themselves; every other pairing is
    /// `String`. The operation is commutative.
    pub fn merge(self, other: Type) -> Type {
        use Type::*;

        match (self, other) {
            (String, _) | (_, String) => String,
            (Null, t) | (t, Null) => t,
            (a, b) if a == b => a,

            (Integer, Long) | (Long, Integer) => Long,
            (Integer | Long, BigInteger) | (BigInteger, Integer | Long) => BigInteger,
            (Integer | Long, Double) | (Double, Integer | Long) => Double,
            (BigInteger, Double) | (Double, BigInteger) => BigDecimal,
            (Integer | Long | BigInteger | Double, BigDecimal)
            | (BigDecimal, Integer | Long | BigInteger | Double) => BigDecimal,

            _ => String,
        }
    }

    /// Column type to report once sampling is over; unresolved columns are strings.
    #[inline]
    pub fn resolved(self) -> Type {
        if self == Type::Null { Type::String } else { self }
    }
}
