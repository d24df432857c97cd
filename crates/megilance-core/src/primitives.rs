//! Pure logic behind the presentational primitives.
//!
//! Every function here is a total mapping from props to a fixed visual
//! treatment: the same input always yields the same output.

use std::fmt;

use crate::error::UiError;

/// General-purpose badge colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge--default",
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Secondary => "badge--secondary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Danger => "badge--danger",
        }
    }
}

/// Payment state shown in transaction lists and cards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "payment-badge--paid",
            PaymentStatus::Pending => "payment-badge--pending",
            PaymentStatus::Failed => "payment-badge--failed",
        }
    }
}

/// Sentiment bucket for a score in `[-1, 1]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bucket a score. Above 0.2 is positive, below -0.2 negative.
    ///
    /// Out-of-range scores are clamped first; NaN is neutral.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Sentiment::Neutral;
        }
        let score = score.clamp(-1.0, 1.0);
        if score > 0.2 {
            Sentiment::Positive
        } else if score < -0.2 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Sentiment::Positive => "sentiment--positive",
            Sentiment::Neutral => "sentiment--neutral",
            Sentiment::Negative => "sentiment--negative",
        }
    }
}

/// Alert severity; selects icon and colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertSeverity {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "\u{2139}",
            AlertSeverity::Success => "\u{2714}",
            AlertSeverity::Warning => "\u{26A0}",
            AlertSeverity::Danger => "\u{26D4}",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "alert--info",
            AlertSeverity::Success => "alert--success",
            AlertSeverity::Warning => "alert--warning",
            AlertSeverity::Danger => "alert--danger",
        }
    }

    /// ARIA role: urgent severities interrupt, the rest are polite.
    pub fn role(&self) -> &'static str {
        match self {
            AlertSeverity::Warning | AlertSeverity::Danger => "alert",
            AlertSeverity::Info | AlertSeverity::Success => "status",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoaderSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl LoaderSize {
    pub fn class(&self) -> &'static str {
        match self {
            LoaderSize::Xs => "loader--xs",
            LoaderSize::Sm => "loader--sm",
            LoaderSize::Md => "loader--md",
            LoaderSize::Lg => "loader--lg",
            LoaderSize::Xl => "loader--xl",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoaderVariant {
    #[default]
    Spinner,
    Dots,
    Pulse,
}

impl LoaderVariant {
    pub fn class(&self) -> &'static str {
        match self {
            LoaderVariant::Spinner => "loader--spinner",
            LoaderVariant::Dots => "loader--dots",
            LoaderVariant::Pulse => "loader--pulse",
        }
    }

    /// Number of animated child elements.
    pub fn segments(&self) -> usize {
        match self {
            LoaderVariant::Dots => 3,
            LoaderVariant::Spinner | LoaderVariant::Pulse => 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPosition {
    pub fn class(&self) -> &'static str {
        match self {
            TooltipPosition::Top => "tooltip--top",
            TooltipPosition::Bottom => "tooltip--bottom",
            TooltipPosition::Left => "tooltip--left",
            TooltipPosition::Right => "tooltip--right",
        }
    }
}

/// A percentage guaranteed to lie in `[0, 100]`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Percent(f64);

impl Percent {
    /// Clamp any input into range. NaN becomes 0; out-of-range values are
    /// silently clamped, never rejected.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Percent(0.0)
        } else {
            Percent(value.clamp(0.0, 100.0))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// Geometry of the semicircular rank gauge, in a 100x50 viewBox.
///
/// The arc starts at the left end of the semicircle and sweeps clockwise
/// by `score / 100 * 180` degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeGeometry {
    pub score: Percent,
}

impl GaugeGeometry {
    pub const CENTER_X: f64 = 50.0;
    pub const CENTER_Y: f64 = 50.0;
    pub const RADIUS: f64 = 40.0;

    pub fn new(score: f64) -> Self {
        Self {
            score: Percent::clamped(score),
        }
    }

    /// Needle rotation in degrees, `0..=180`.
    pub fn rotation_deg(&self) -> f64 {
        self.score.fraction() * 180.0
    }

    /// End point of the filled arc.
    pub fn arc_end(&self) -> (f64, f64) {
        let angle = std::f64::consts::PI * (1.0 - self.score.fraction());
        (
            Self::CENTER_X + Self::RADIUS * angle.cos(),
            Self::CENTER_Y - Self::RADIUS * angle.sin(),
        )
    }

    /// SVG path of the background track (full semicircle).
    pub fn track_path(&self) -> String {
        format!(
            "M {} {} A {r} {r} 0 0 1 {} {}",
            Self::CENTER_X - Self::RADIUS,
            Self::CENTER_Y,
            Self::CENTER_X + Self::RADIUS,
            Self::CENTER_Y,
            r = Self::RADIUS
        )
    }

    /// SVG path of the filled arc. Never needs the large-arc flag since the
    /// sweep is at most 180 degrees.
    pub fn fill_path(&self) -> String {
        let (x, y) = self.arc_end();
        format!(
            "M {} {} A {r} {r} 0 0 1 {:.3} {:.3}",
            Self::CENTER_X - Self::RADIUS,
            Self::CENTER_Y,
            x,
            y,
            r = Self::RADIUS
        )
    }
}

/// Up to two uppercase letters derived from a display name.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Initials(String);

impl Initials {
    /// First letter of the first and last whitespace-separated tokens, or the
    /// first two characters of a single-token name, uppercased.
    ///
    /// A name with no visible characters is a caller bug and yields
    /// [`UiError::EmptyName`]; avatars render `?` in that case.
    pub fn from_name(name: &str) -> Result<Self, UiError> {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        let initials: String = match tokens.as_slice() {
            [] => return Err(UiError::EmptyName),
            [single] => single.chars().take(2).collect(),
            [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
        };
        Ok(Initials(initials.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fallback glyph when initials cannot be derived.
pub const UNKNOWN_INITIALS: &str = "?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_boundaries() {
        assert_eq!(Percent::clamped(-5.0).value(), 0.0);
        assert_eq!(Percent::clamped(0.0).value(), 0.0);
        assert_eq!(Percent::clamped(50.0).value(), 50.0);
        assert_eq!(Percent::clamped(150.0).value(), 100.0);
        assert_eq!(Percent::clamped(f64::NAN).value(), 0.0);
        assert_eq!(Percent::clamped(f64::INFINITY).value(), 100.0);
    }

    #[test]
    fn percent_display() {
        assert_eq!(Percent::clamped(42.0).to_string(), "42");
        assert_eq!(Percent::clamped(42.5).to_string(), "42.5");
    }

    #[test]
    fn gauge_rotation() {
        assert_eq!(GaugeGeometry::new(0.0).rotation_deg(), 0.0);
        assert_eq!(GaugeGeometry::new(50.0).rotation_deg(), 90.0);
        assert_eq!(GaugeGeometry::new(250.0).rotation_deg(), 180.0);
    }

    #[test]
    fn gauge_arc_end_points() {
        let (x, y) = GaugeGeometry::new(0.0).arc_end();
        assert!((x - 10.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);

        let (x, y) = GaugeGeometry::new(50.0).arc_end();
        assert!((x - 50.0).abs() < 1e-9 && (y - 10.0).abs() < 1e-9);

        let (x, y) = GaugeGeometry::new(100.0).arc_end();
        assert!((x - 90.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn initials_examples() {
        assert_eq!(Initials::from_name("Jane Doe").unwrap().as_str(), "JD");
        assert_eq!(Initials::from_name("Madonna").unwrap().as_str(), "MA");
        assert_eq!(Initials::from_name("  ada   king lovelace ").unwrap().as_str(), "AL");
        assert_eq!(Initials::from_name("x").unwrap().as_str(), "X");
    }

    #[test]
    fn initials_empty_is_error() {
        assert!(matches!(Initials::from_name(""), Err(UiError::EmptyName)));
        assert!(matches!(Initials::from_name("   "), Err(UiError::EmptyName)));
    }

    #[test]
    fn sentiment_buckets() {
        assert_eq!(Sentiment::from_score(0.5), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.21), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(9.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(f64::NAN), Sentiment::Neutral);
    }

    #[test]
    fn payment_labels() {
        assert_eq!(PaymentStatus::Paid.label(), "Paid");
        assert_eq!(PaymentStatus::Pending.label(), "Pending");
        assert_eq!(PaymentStatus::Failed.label(), "Failed");
        assert_eq!(PaymentStatus::Failed.class(), "payment-badge--failed");
    }

    #[test]
    fn variant_defaults() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
        assert_eq!(AlertSeverity::default(), AlertSeverity::Info);
        assert_eq!(LoaderSize::default(), LoaderSize::Md);
        assert_eq!(LoaderVariant::Dots.segments(), 3);
        assert_eq!(TooltipPosition::default().class(), "tooltip--top");
    }

    #[test]
    fn alert_roles() {
        assert_eq!(AlertSeverity::Danger.role(), "alert");
        assert_eq!(AlertSeverity::Info.role(), "status");
    }
}
