pub struct OutputGenerator;

impl OutputGenerator {
    /// Human-readable rendering of the `items` result record for the log.
    pub fn format_result(items: &[String]) -> String {
        let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();

        format!("{{'items': [{}]}}", quoted.join(", "))
    }
}

fn quote(item: &str) -> String {
    format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))
}
