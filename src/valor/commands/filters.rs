use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(collection: &Collection) -> CmdResult {
    let mut result = CmdResult::default().with_vocabulary(collection.vocabulary().clone());
    if collection.is_empty() {
        result.add_message(CmdMessage::warning("The collection is empty."));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::fixtures::sample_records;

    #[test]
    fn returns_the_collection_vocabulary() {
        let result = run(&Collection::from_records(sample_records()));
        let vocab = result.vocabulary.unwrap();
        assert_eq!(vocab.wars, vec!["WWI", "WWII"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_on_empty_collection() {
        let result = run(&Collection::from_records(Vec::new()));
        assert_eq!(result.messages.len(), 1);
    }
}
