//! Property-based tests for tokenizing and parsing.

use proptest::prelude::*;
use wordlist_args::tokenizer::ArgLexer;
use wordlist_args::{ArgParser, ParseOutcome};
use wordlist_core::{Schema, SchemaEntry};

/// One piece of generated input: a flag naming the n-th declared name, or a
/// bare value.
#[derive(Debug, Clone)]
enum Piece {
    Flag { index: prop::sample::Index, long: bool },
    Value(String),
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9._/]{1,8}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,6}".prop_filter("help is reserved", |name| name != "help")
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        (any::<prop::sample::Index>(), any::<bool>())
            .prop_map(|(index, long)| Piece::Flag { index, long }),
        value_strategy().prop_map(Piece::Value),
    ]
}

/// Schemas whose aliases always point at declared names.
fn schema_strategy() -> impl Strategy<Value = Schema> {
    (
        prop::collection::btree_map(name_strategy(), prop::option::of(1usize..4), 1..5),
        prop::collection::vec(("[a-gi-z]", any::<prop::sample::Index>()), 0..3),
        any::<bool>(),
    )
        .prop_map(|(canonical, aliases, positional)| {
            let names: Vec<String> = canonical.keys().cloned().collect();
            let mut schema: Schema = canonical
                .into_iter()
                .map(|(name, num)| {
                    let entry = match num {
                        Some(num) => SchemaEntry::sequence().with_num(num),
                        None => SchemaEntry::sequence(),
                    };
                    (name, entry)
                })
                .collect();
            for (alias, index) in aliases {
                schema.insert(alias, SchemaEntry::alias_of(index.get(&names).clone()));
            }
            if positional {
                schema.insert("$default", SchemaEntry::sequence());
            }
            schema
        })
}

fn render(pieces: &[Piece], schema: &Schema) -> String {
    let names: Vec<&str> = schema
        .iter()
        .map(|(name, _)| name)
        .filter(|name| *name != "$default")
        .collect();
    pieces
        .iter()
        .map(|piece| match piece {
            Piece::Flag { index, long } => {
                let dashes = if *long { "--" } else { "-" };
                format!("{dashes}{}", index.get(&names))
            }
            Piece::Value(value) => value.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #[test]
    fn test_resolvable_schemas_never_raise_defects(
        schema in schema_strategy(),
        pieces in prop::collection::vec(piece_strategy(), 0..12),
    ) {
        let input = render(&pieces, &schema);
        let parser = ArgParser::new().with_schema(schema);
        prop_assert!(parser.parse(&input).is_ok());
    }

    #[test]
    fn test_help_flag_anywhere_yields_no_result(
        schema in schema_strategy(),
        pieces in prop::collection::vec(piece_strategy(), 0..12),
        position in any::<prop::sample::Index>(),
        help in prop::sample::select(vec!["-h", "--h", "-help", "--help"]),
    ) {
        let mut words: Vec<String> = if pieces.is_empty() {
            Vec::new()
        } else {
            render(&pieces, &schema).split(' ').map(str::to_string).collect()
        };
        let at = position.index(words.len() + 1);
        words.insert(at, help.to_string());
        let input = words.join(" ");

        for parser in [ArgParser::new(), ArgParser::new().with_schema(schema.clone())] {
            let outcome = parser.parse(&input);
            prop_assert!(outcome.is_ok());
            prop_assert!(outcome.unwrap().into_result().is_none());
        }
    }

    #[test]
    fn test_well_formed_input_is_fully_consumed(
        pieces in prop::collection::vec(
            prop_oneof![
                value_strategy(),
                "[a-z]{1,6}".prop_map(|name| format!("-{name}")),
                "[a-z]{1,6}".prop_map(|name| format!("--{name}")),
            ],
            0..16,
        ),
    ) {
        let input = pieces.join(" ");
        let scan = ArgLexer::tokenize(&input);
        prop_assert!(scan.is_complete());
        prop_assert_eq!(scan.tokens.len(), pieces.len());
    }

    #[test]
    fn test_parsing_is_deterministic(
        schema in schema_strategy(),
        pieces in prop::collection::vec(piece_strategy(), 0..12),
    ) {
        let input = render(&pieces, &schema);
        let parser = ArgParser::new().with_schema(schema);
        prop_assert_eq!(parser.parse(&input), parser.parse(&input));
    }

    #[test]
    fn test_arity_law(
        schema in schema_strategy(),
        pieces in prop::collection::vec(piece_strategy(), 0..12),
    ) {
        let input = render(&pieces, &schema);
        let parser = ArgParser::new().with_schema(schema.clone());
        if let Ok(ParseOutcome::Parsed(result)) = parser.parse(&input) {
            for (name, value) in result.iter() {
                let scalar = schema.get(name).is_some_and(SchemaEntry::is_scalar);
                prop_assert_eq!(value.is_scalar(), scalar, "arity mismatch for {}", name);
            }
        }
    }
}
