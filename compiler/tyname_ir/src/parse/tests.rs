use super::*;

use pretty_assertions::assert_eq;

fn parse(input: &str) -> (TypeTable, Result<TypeIdx, ParseError>) {
    let mut table = TypeTable::new();
    let result = parse_type_name(&mut table, input);
    (table, result)
}

fn names(table: &TypeTable, idxs: &[TypeIdx]) -> Vec<String> {
    idxs.iter()
        .map(|&idx| table[idx].simple_name().to_owned())
        .collect()
}

#[test]
fn parses_plain_name() {
    let (table, result) = parse("ComplexType");
    let idx = result.unwrap();
    assert_eq!(table[idx], TypeDescriptor::new("ComplexType"));
}

#[test]
fn splits_namespace_from_simple_name() {
    let (table, result) = parse("Swashbuckle.AspNetCore.SwaggerGen.Test.ComplexType");
    let desc = &table[result.unwrap()];
    assert_eq!(desc.simple_name(), "ComplexType");
    assert_eq!(
        desc.namespace(),
        ["Swashbuckle", "AspNetCore", "SwaggerGen", "Test"]
    );
}

#[test]
fn parses_angle_bracket_generics() {
    let (table, result) =
        parse("System.Collections.Generic.IDictionary<System.String, System.Decimal>");
    let desc = &table[result.unwrap()];
    assert_eq!(desc.simple_name(), "IDictionary");
    assert_eq!(names(&table, desc.generic_args()), ["String", "Decimal"]);
}

#[test]
fn parses_square_bracket_generics_with_arity() {
    let (table, result) = parse("System.Collections.Generic.IEnumerable`1[System.String]");
    let desc = &table[result.unwrap()];
    assert_eq!(desc.simple_name(), "IEnumerable");
    assert_eq!(names(&table, desc.generic_args()), ["String"]);
}

#[test]
fn shares_repeated_arguments() {
    let (table, result) = parse("IDictionary<String,String>");
    let desc = &table[result.unwrap()];
    assert_eq!(desc.generic_args()[0], desc.generic_args()[1]);
    assert_eq!(table.len(), 2);
}

#[test]
fn parses_nested_types() {
    let (table, result) = parse("Swashbuckle.AspNetCore.SwaggerGen.Test.ContainingType+NestedType");
    let nested = &table[result.unwrap()];
    assert_eq!(nested.simple_name(), "NestedType");

    let outer = &table[nested.declaring_type().unwrap()];
    assert_eq!(outer.simple_name(), "ContainingType");
    assert!(outer.declaring_type().is_none());
    assert_eq!(outer.namespace(), nested.namespace());
}

#[test]
fn generic_arguments_attach_to_their_segment() {
    let (table, result) = parse("Outer<Int32>+Inner<String>");
    let inner = &table[result.unwrap()];
    assert_eq!(names(&table, inner.generic_args()), ["String"]);

    let outer = &table[inner.declaring_type().unwrap()];
    assert_eq!(names(&table, outer.generic_args()), ["Int32"]);
}

#[test]
fn parses_nested_generic_arguments() {
    let (table, result) = parse("List<Dictionary<String, List<Int32>>>");
    let list = &table[result.unwrap()];
    let dict = &table[list.generic_args()[0]];
    assert_eq!(dict.simple_name(), "Dictionary");
    let inner = &table[dict.generic_args()[1]];
    assert_eq!(names(&table, inner.generic_args()), ["Int32"]);
}

#[test]
fn ignores_whitespace_around_brackets_and_commas() {
    let (_, compact) = parse("Pair<A,B>");
    let (table, spaced) = parse("  Pair < A ,  B >  ");
    let desc = &table[spaced.unwrap()];
    assert!(compact.is_ok());
    assert_eq!(names(&table, desc.generic_args()), ["A", "B"]);
}

#[test]
fn parses_deeply_nested_generics() {
    let depth = 5_000;
    let input = format!("{}T{}", "L<".repeat(depth), ">".repeat(depth));
    let (table, result) = parse(&input);
    assert!(result.is_ok());
    assert_eq!(table.len(), depth + 1);
}

#[test]
fn rejects_empty_input() {
    assert_eq!(parse("").1, Err(ParseError::ExpectedName { offset: 0 }));
    assert_eq!(parse("   ").1, Err(ParseError::ExpectedName { offset: 3 }));
}

#[test]
fn rejects_empty_segments() {
    assert_eq!(
        parse("System..String").1,
        Err(ParseError::ExpectedName { offset: 7 })
    );
    assert_eq!(
        parse("Outer+").1,
        Err(ParseError::ExpectedName { offset: 6 })
    );
}

#[test]
fn rejects_empty_argument_list() {
    assert_eq!(
        parse("List<>").1,
        Err(ParseError::EmptyArguments { offset: 4 })
    );
}

#[test]
fn rejects_mismatched_brackets() {
    assert_eq!(
        parse("List<String]").1,
        Err(ParseError::MismatchedBracket {
            open: '<',
            close: ']',
            offset: 11,
        })
    );
}

#[test]
fn rejects_unclosed_arguments() {
    assert_eq!(
        parse("List<String").1,
        Err(ParseError::UnexpectedEnd { expected: '>' })
    );
}

#[test]
fn rejects_trailing_input() {
    assert_eq!(
        parse("List<String> extra").1,
        Err(ParseError::UnexpectedChar {
            found: 'e',
            offset: 13,
        })
    );
}

#[test]
fn rejects_arity_without_digits() {
    assert_eq!(
        parse("List`<String>").1,
        Err(ParseError::MalformedArity { offset: 4 })
    );
}

#[test]
fn error_messages_name_the_offset() {
    let err = ParseError::EmptyArguments { offset: 4 };
    assert_eq!(err.to_string(), "empty generic argument list at offset 4");
}
