// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Integration tests for tree building and build traces

use notation_tree::notation::parse_tokens;
use notation_tree::{convert, infix_to_pn, infix_to_rpn, NotationError, Notation, Operator, TreeBuilder};
use std::collections::HashSet;

#[test]
fn test_trace_has_one_snapshot_per_token() {
    for expression in ["3+4*2", "(3+4)*2", "-3+4", "10/2-3", "2*(3+4)-5", "7"] {
        let conversion = convert(expression).unwrap();

        for (tokens, build) in [
            (&conversion.rpn, &conversion.rpn_build),
            (&conversion.pn, &conversion.pn_build),
        ] {
            assert_eq!(build.trace.len(), tokens.len(), "{expression}");
            let last = build.trace.last().unwrap();
            assert_eq!(last.stack, vec![build.tree.root()], "{expression}");
        }
    }
}

#[test]
fn test_every_operator_consumes_two_and_pushes_one() {
    let tokens = infix_to_rpn("2*(3+4)-5").unwrap();
    let build = TreeBuilder::build(&tokens, Notation::Postfix).unwrap();

    let mut previous = 0;
    for step in &build.trace {
        let expected = if step.token.is_operand() { previous + 1 } else { previous - 1 };
        assert_eq!(step.stack.len(), expected);
        previous = step.stack.len();
    }
}

#[test]
fn test_one_node_per_token_with_unique_ids() {
    let conversion = convert("2*2+2").unwrap();
    let tree = &conversion.rpn_build.tree;

    assert_eq!(tree.len(), conversion.rpn.len());
    let ids: HashSet<_> = tree.preorder(tree.root()).into_iter().collect();
    assert_eq!(ids.len(), tree.len());

    let twos = tree.nodes().iter().filter(|n| n.label() == "2").count();
    assert_eq!(twos, 3);
}

#[test]
fn test_snapshots_reference_existing_nodes() {
    let conversion = convert("(1+2)*(3-4)").unwrap();
    let build = &conversion.pn_build;

    for step in &build.trace {
        for id in &step.stack {
            assert!(build.tree.get(*id).is_some());
        }
    }
}

#[test]
fn test_postfix_and_prefix_trees_agree() {
    for expression in ["8-3-1", "16/4/2", "1-2+3*4/5", "(1.5+2)*-3"] {
        let conversion = convert(expression).unwrap();
        let rpn_tree = &conversion.rpn_build.tree;
        let pn_tree = &conversion.pn_build.tree;

        assert_eq!(rpn_tree.to_infix(rpn_tree.root()), pn_tree.to_infix(pn_tree.root()));
        assert_eq!(rpn_tree.evaluate(), pn_tree.evaluate());
    }
}

#[test]
fn test_operator_nodes_are_binary() {
    let conversion = convert("1+2*3-4/5").unwrap();
    for node in conversion.rpn_build.tree.nodes() {
        assert_eq!(node.is_leaf(), node.children().is_none());
    }
}

#[test]
fn test_builder_failures() {
    let tokens = parse_tokens(&["1", "+", "2"]).unwrap();
    assert_eq!(
        TreeBuilder::build(&tokens, Notation::Postfix),
        Err(NotationError::InsufficientOperands {
            operator: Operator::Add,
            position: 1,
            available: 1,
        })
    );

    // prefix scans right to left, so the operator at index 0 fails last
    let tokens = parse_tokens(&["+", "3"]).unwrap();
    assert_eq!(
        TreeBuilder::build(&tokens, Notation::Prefix),
        Err(NotationError::InsufficientOperands {
            operator: Operator::Add,
            position: 0,
            available: 1,
        })
    );

    // juxtaposed operands survive conversion but not tree building
    let tokens = infix_to_pn("(1)(2)").unwrap();
    assert_eq!(
        TreeBuilder::build(&tokens, Notation::Prefix),
        Err(NotationError::LeftoverOperands { count: 2 })
    );
    assert!(convert("3+").is_err());
}
