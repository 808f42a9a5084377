/*! Text transformers.

Turn a raw book text into a sequence of cleaned sentences:

1. [Normalize] replaces encoding artifacts with spaces,
1. the text is split on `.`, `!` and `?`,
1. [TrimPolicy] removes front and back matter,
1. each remaining unit is stripped from surrounding spaces, hyphens and quotes.

[Extractor] chains them.
!*/

mod boilerplate;
mod extract;
mod normalize;
mod transform;

pub use boilerplate::TrimPolicy;
pub use extract::Extractor;
pub use normalize::Normalize;
pub use transform::Transform;
