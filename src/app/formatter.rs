pub const FENCE: &str = "```";

pub struct OutputGenerator;

impl OutputGenerator {
    /// Joins tree lines the way they are stored in the snapshot file.
    pub fn generate_tree(lines: &[String]) -> String {
        lines.join("\n")
    }

    /// Wraps tree lines in a fenced code block ready for splicing into markdown.
    pub fn format_as_codeblock(lines: &[String]) -> String {
        format!("{}\n{}\n{}", FENCE, Self::generate_tree(lines), FENCE)
    }
}
