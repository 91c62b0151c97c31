use enfa::formlang::{Labels, Summary, TableView};
use enfa::{Symbol, SyntaxError, Token, build_automaton, compile, convert_to_postfix, export_table};

#[test]
fn test_literal_round_trip() {
    let nfa = compile("a").unwrap();
    assert_eq!(nfa.num_states(), 2);
    assert_eq!(
        nfa.transitions().collect::<Vec<_>>(),
        vec![(0, Symbol::Literal('a'), 1)]
    );
    assert!(nfa.state(0).unwrap().is_initial());
    assert!(nfa.state(1).unwrap().is_final());
}

#[test]
fn test_postfix_concatenation() {
    let nfa = build_automaton(&[Token::Literal('a'), Token::Literal('b'), Token::Concat]).unwrap();
    assert_eq!(nfa.num_states(), 4);
    assert_eq!(nfa.initial_state(), Some(0));
    assert_eq!(nfa.final_state(), Some(3));
    assert_eq!(nfa.state(1).unwrap().targets(Symbol::Epsilon), &[2]);
}

#[test]
fn test_epsilon_does_not_collide_with_letter_e() {
    let nfa = compile("e.e*").unwrap();
    let table = export_table(&nfa);
    assert_eq!(
        table.columns(),
        &[Symbol::Literal('e'), Symbol::Epsilon]
    );
    assert_eq!(nfa.symbols().literal_count(), 1);
}

#[test]
fn test_failed_compile_leaves_earlier_result_intact() {
    let nfa = compile("a|b").unwrap();
    let before = export_table(&nfa);
    assert!(compile("a|").is_err());
    assert_eq!(export_table(&nfa), before);
}

#[test]
fn test_error_kinds() {
    assert!(matches!(
        compile("*"),
        Err(SyntaxError::OperatorUnderflow { operator: '*', .. })
    ));
    assert!(matches!(
        compile("+.a"),
        Err(SyntaxError::OperatorUnderflow { operator: '+', .. })
    ));
    assert_eq!(compile("   ").unwrap_err(), SyntaxError::EmptyPattern);
    assert!(matches!(
        convert_to_postfix("(a.b"),
        Err(SyntaxError::UnbalancedGrouping { position: 0 })
    ));
    assert!(matches!(
        compile("a.#"),
        Err(SyntaxError::UnsupportedSymbol { symbol: '#', position: 2 })
    ));
}

#[test]
fn test_full_report_for_union() {
    let nfa = compile("a|b").unwrap();
    let summary = Summary::of(&nfa);
    assert_eq!(summary.initial, Some(4));
    assert_eq!(summary.final_state, Some(5));
    assert_eq!(summary.literals, vec!['a', 'b']);

    let labels = Labels::default();
    let text = TableView::new(&export_table(&nfa), &labels).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "states\ta\tb\tε");
    assert_eq!(lines[5], "4\t-\t-\t0,2");
    assert_eq!(lines[6], "5\t-\t-\t-");
}
