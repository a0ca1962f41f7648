// Wire decoding follows the bigdecimal crate's Postgres support.
use bigdecimal::{
    BigDecimal,
    num_bigint::{BigInt, BigUint, Sign},
};
use byteorder::{BigEndian, ReadBytesExt};
use postgres::types::{FromSql, Type};
use std::{fmt::Display, io::Cursor};

/// Postgres `NUMERIC` with its full value range.
///
/// `None` stands for 'NaN', `Some` for every other value.
#[derive(Debug, Default, Ord, PartialOrd, Eq, PartialEq, Clone)]
pub struct PgNumeric {
    pub n: Option<BigDecimal>,
}

impl<'a> FromSql<'a> for PgNumeric {
    fn from_sql(
        _: &Type,
        raw: &'a [u8],
    ) -> Result<Self, Box<dyn std::error::Error + 'static + Sync + Send>> {
        let mut rdr = Cursor::new(raw);

        let n_digits = rdr.read_u16::<BigEndian>()?;
        let weight = rdr.read_i16::<BigEndian>()?;
        let sign = match rdr.read_u16::<BigEndian>()? {
            0x4000 => Sign::Minus,
            0x0000 => Sign::Plus,
            0xC000 => return Ok(Self { n: None }),
            other => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("unknown numeric sign 0x{other:04X}"),
                )
                .into());
            }
        };
        let scale = rdr.read_u16::<BigEndian>()?;

        // base-10000 digits, most significant first
        let mut biguint = BigUint::from(0u32);
        for n in (0..n_digits).rev() {
            let digit = rdr.read_u16::<BigEndian>()?;
            biguint += BigUint::from(digit) * BigUint::from(10_000u32).pow(n as u32);
        }

        // the leading digit carries 10000^(n_digits - 1) but should carry 10000^weight
        let correction_exp = 4 * (i64::from(weight) - i64::from(n_digits) + 1);
        let res = BigDecimal::new(BigInt::from_biguint(sign, biguint), -correction_exp)
            .with_scale(i64::from(scale));

        Ok(Self { n: Some(res) })
    }

    fn accepts(ty: &Type) -> bool {
        matches!(*ty, Type::NUMERIC)
    }
}

impl Display for PgNumeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.n {
            Some(ref n) => write!(f, "{n}"),
            None => write!(f, "NaN"),
        }
    }
}
