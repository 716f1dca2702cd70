//! Panel control line bundle

/// The five panel control lines
///
/// The scan head uses column, row and reset; the commit pulse uses polarity
/// and commit.
pub struct ControlLines<P> {
    /// Column step
    pub column: P,
    /// Row step
    pub row: P,
    /// Set/unset polarity
    pub polarity: P,
    /// Coil commit pulse
    pub commit: P,
    /// Scan head reset
    pub reset: P,
}
