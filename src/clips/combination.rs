use super::Clip;
use std::path::Path;

/// Ordered triple of clips, concatenated first to third.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    pub first: Clip,
    pub second: Clip,
    pub third: Clip,
}

impl Combination {
    pub fn new(first: Clip, second: Clip, third: Clip) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    pub fn clips(&self) -> [&Clip; 3] {
        [&self.first, &self.second, &self.third]
    }

    pub fn paths(&self) -> [&Path; 3] {
        self.clips().map(|clip| clip.path.as_path())
    }

    pub fn output_name(&self, extension: &str) -> String {
        format!(
            "{}.{}",
            self.clips()
                .iter()
                .map(|clip| clip.sanitized_name())
                .collect::<Vec<_>>()
                .join(", "),
            extension
        )
    }

    /// `A.mov, B.mov, C.mov`
    pub fn display_names(&self) -> String {
        self.clips()
            .iter()
            .map(|clip| clip.file_name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_repeat(&self) -> bool {
        self.first == self.second || self.first == self.third || self.second == self.third
    }
}

#[cfg(test)]
mod tests {
    use super::Combination;
    use crate::clips::Clip;

    fn combination(a: &str, b: &str, c: &str) -> Combination {
        Combination::new(Clip::new(a), Clip::new(b), Clip::new(c))
    }

    #[test]
    fn test_output_name() {
        let c = combination("/clips/A.mov", "/clips/B.mov", "/clips/C.mov");
        assert_eq!(c.output_name("mp4"), "A, B, C.mp4");
        assert_eq!(c.output_name("mp4"), c.clone().output_name("mp4"));

        let c = combination("/clips/My Clip.mov", "/clips/B.mov", "/clips/C.mov");
        assert_eq!(c.output_name("mp4"), "My_Clip, B, C.mp4");
    }

    #[test]
    fn test_output_name_is_order_sensitive() {
        let abc = combination("A.mov", "B.mov", "C.mov");
        let bac = combination("B.mov", "A.mov", "C.mov");
        let acb = combination("A.mov", "C.mov", "B.mov");
        assert_ne!(abc.output_name("mp4"), bac.output_name("mp4"));
        assert_ne!(abc.output_name("mp4"), acb.output_name("mp4"));
    }

    #[test]
    fn test_has_repeat() {
        assert!(!combination("A.mov", "B.mov", "C.mov").has_repeat());
        assert!(combination("A.mov", "B.mov", "A.mov").has_repeat());
    }

    #[test]
    fn test_display_names() {
        let c = combination("/x/A.mov", "/y/B b.mov", "C.mov");
        assert_eq!(c.display_names(), "A.mov, B b.mov, C.mov");
    }
}
