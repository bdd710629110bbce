use argscope_args::application::ApplicationArguments;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON-serializable view of a parsed argument set.
///
/// Option order is first-seen order, so repeated runs over the same tokens
/// produce identical reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArgsReport {
    pub source_args: Vec<String>,
    pub option_names: Vec<String>,
    pub options: IndexMap<String, Vec<String>>,
    pub non_option_args: Vec<String>,
}

impl ArgsReport {
    pub fn from_arguments<A: ApplicationArguments>(arguments: &A) -> Self {
        let option_names: Vec<String> = arguments
            .option_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut options = IndexMap::new();
        for name in &option_names {
            let values = arguments.option_values(name).unwrap_or_default().to_vec();
            options.insert(name.clone(), values);
        }

        Self {
            source_args: arguments.source_args().to_vec(),
            option_names,
            options,
            non_option_args: arguments.non_option_args().to_vec(),
        }
    }
}
