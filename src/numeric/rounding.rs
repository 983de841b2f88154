// ============================================================================
// Rounding Modes
// The seven rounding strategies applied when trimming a value to a scale
// ============================================================================

/// Enumerates every rounding strategy supported when trimming a value to a
/// target scale.
///
/// Each variant fully determines the result, including tie-breaking, so
/// rounded outcomes are reproducible digit-for-digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round away from zero on any nonzero discarded remainder
    Up,
    /// Truncate toward zero
    Down,
    /// Round toward positive infinity
    Ceiling,
    /// Round toward negative infinity
    Floor,
    /// Round to nearest; on exact tie, round away from zero
    HalfUp,
    /// Round to nearest; on exact tie, round toward zero
    HalfDown,
    /// Round to nearest; on exact tie, round to the neighbor whose last
    /// retained digit is even
    HalfEven,
}

impl RoundingMode {
    /// All seven modes, in declaration order. Handy for exhaustive checks.
    pub const ALL: [RoundingMode; 7] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ];
}
