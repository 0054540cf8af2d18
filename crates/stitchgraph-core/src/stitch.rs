//! The stitch vocabulary understood by StitchGraph.
//!
//! Stitch tokens arrive as plain strings from the normalization service.
//! Known tags map onto the closed [`StitchKind`] set; anything else is kept
//! verbatim as [`StitchType::Unknown`] so a chart can still be produced.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// A recognized crochet stitch.
///
/// Tags are matched case-sensitively (`"sc"` is a single crochet, `"SC"` is not
/// recognized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StitchKind {
    /// Chain (`ch`)
    Chain,
    /// Slip stitch (`slst`)
    SlipStitch,
    /// Single crochet (`sc`)
    SingleCrochet,
    /// Half double crochet (`hdc`)
    HalfDoubleCrochet,
    /// Double crochet (`dc`)
    DoubleCrochet,
    /// Treble crochet (`tr`)
    Treble,
    /// Generic increase (`inc`), two stitches worked into one base
    Increase,
    /// Generic decrease (`dec`), two bases worked together
    Decrease,
    /// Two single crochets into one base (`sc2inc`)
    Sc2Inc,
    /// Three single crochets into one base (`sc3inc`)
    Sc3Inc,
    /// Two double crochets into one base (`dc2inc`)
    Dc2Inc,
    /// Three double crochets into one base (`dc3inc`)
    Dc3Inc,
    /// Single crochet two together (`sc2tog`)
    Sc2Tog,
    /// Single crochet three together (`sc3tog`)
    Sc3Tog,
    /// Double crochet two together (`dc2tog`)
    Dc2Tog,
    /// Double crochet three together (`dc3tog`)
    Dc3Tog,
    /// Magic ring (`mr`), the starting loop of a piece worked in rounds
    MagicRing,
}

impl StitchKind {
    /// Every recognized stitch, in declaration order.
    pub const ALL: [StitchKind; 17] = [
        StitchKind::Chain,
        StitchKind::SlipStitch,
        StitchKind::SingleCrochet,
        StitchKind::HalfDoubleCrochet,
        StitchKind::DoubleCrochet,
        StitchKind::Treble,
        StitchKind::Increase,
        StitchKind::Decrease,
        StitchKind::Sc2Inc,
        StitchKind::Sc3Inc,
        StitchKind::Dc2Inc,
        StitchKind::Dc3Inc,
        StitchKind::Sc2Tog,
        StitchKind::Sc3Tog,
        StitchKind::Dc2Tog,
        StitchKind::Dc3Tog,
        StitchKind::MagicRing,
    ];

    /// Returns the abbreviation used in normalized patterns.
    pub fn tag(self) -> &'static str {
        match self {
            StitchKind::Chain => "ch",
            StitchKind::SlipStitch => "slst",
            StitchKind::SingleCrochet => "sc",
            StitchKind::HalfDoubleCrochet => "hdc",
            StitchKind::DoubleCrochet => "dc",
            StitchKind::Treble => "tr",
            StitchKind::Increase => "inc",
            StitchKind::Decrease => "dec",
            StitchKind::Sc2Inc => "sc2inc",
            StitchKind::Sc3Inc => "sc3inc",
            StitchKind::Dc2Inc => "dc2inc",
            StitchKind::Dc3Inc => "dc3inc",
            StitchKind::Sc2Tog => "sc2tog",
            StitchKind::Sc3Tog => "sc3tog",
            StitchKind::Dc2Tog => "dc2tog",
            StitchKind::Dc3Tog => "dc3tog",
            StitchKind::MagicRing => "mr",
        }
    }
}

impl FromStr for StitchKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StitchKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or("Unsupported stitch type")
    }
}

impl fmt::Display for StitchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A stitch token as it appears in a row.
///
/// Conversion from a string never fails: unrecognized tokens are preserved
/// as [`StitchType::Unknown`] and laid out with default metrics.
///
/// # Examples
///
/// ```
/// # use stitchgraph_core::stitch::{StitchKind, StitchType};
/// assert_eq!(StitchType::from("sc2tog"), StitchType::Known(StitchKind::Sc2Tog));
/// assert!(StitchType::from("xyz").is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StitchType {
    Known(StitchKind),
    Unknown(String),
}

impl StitchType {
    /// Returns the token text for this stitch.
    pub fn tag(&self) -> &str {
        match self {
            StitchType::Known(kind) => kind.tag(),
            StitchType::Unknown(token) => token,
        }
    }

    /// Returns the recognized kind, if any.
    pub fn kind(&self) -> Option<StitchKind> {
        match self {
            StitchType::Known(kind) => Some(*kind),
            StitchType::Unknown(_) => None,
        }
    }

    /// Returns `true` if the token did not match any known tag.
    pub fn is_unknown(&self) -> bool {
        matches!(self, StitchType::Unknown(_))
    }
}

impl From<&str> for StitchType {
    fn from(token: &str) -> Self {
        match token.parse() {
            Ok(kind) => StitchType::Known(kind),
            Err(_) => StitchType::Unknown(token.to_string()),
        }
    }
}

impl From<StitchKind> for StitchType {
    fn from(kind: StitchKind) -> Self {
        StitchType::Known(kind)
    }
}

impl fmt::Display for StitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for StitchType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
