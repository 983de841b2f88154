// ============================================================================
// Decimal Constants
// Lazily parsed well-known values
// ============================================================================

use crate::numeric::Deci;
use std::sync::LazyLock;

/// π to 31 fractional digits.
pub static PI: LazyLock<Deci> = LazyLock::new(|| {
    "3.1415926535897932384626433832795"
        .parse()
        .expect("pi literal is valid")
});

/// Euler's number to 31 fractional digits.
pub static E: LazyLock<Deci> = LazyLock::new(|| {
    "2.7182818284590452353602874713527"
        .parse()
        .expect("e literal is valid")
});

/// 0.5
pub static HALF: LazyLock<Deci> = LazyLock::new(|| "0.5".parse().expect("half literal is valid"));

/// 2
pub static TWO: LazyLock<Deci> = LazyLock::new(|| Deci::from(2));

/// 100
pub static HUNDRED: LazyLock<Deci> = LazyLock::new(|| Deci::from(100));

/// 1000
pub static THOUSAND: LazyLock<Deci> = LazyLock::new(|| Deci::from(1000));

/// 1000000
pub static MILLION: LazyLock<Deci> = LazyLock::new(|| Deci::from(1_000_000));

/// -1
pub static NEGATIVE_ONE: LazyLock<Deci> = LazyLock::new(|| Deci::from(-1));

/// 0.1
pub static ONE_TENTH: LazyLock<Deci> =
    LazyLock::new(|| "0.1".parse().expect("tenth literal is valid"));

/// 0.01
pub static ONE_HUNDREDTH: LazyLock<Deci> =
    LazyLock::new(|| "0.01".parse().expect("hundredth literal is valid"));

/// 0.001
pub static ONE_THOUSANDTH: LazyLock<Deci> =
    LazyLock::new(|| "0.001".parse().expect("thousandth literal is valid"));
