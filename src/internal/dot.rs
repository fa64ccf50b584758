//! The `dot` module contains the conversion of the automata to the graphviz dot format.
//! The functions in this module are used for testing and debugging purposes.
//! Character ranges are already escaped by their `Display` implementation.

use std::{fmt::Debug, io::Write};

use dot_writer::{Attributes, DotWriter, RankDirection};

use super::{Dfa, Nfa};

fn node_name(index: usize) -> String {
    format!("node_{}", index)
}

/// Render the NFA to a graphviz dot format.
#[cfg(test)]
pub(crate) fn nfa_render<V: Debug, W: Write>(nfa: &Nfa<V>, label: &str, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    for (index, state) in nfa.states().iter().enumerate() {
        let source_id = {
            let mut source_node = digraph.node_auto();
            source_node.set_label(&index.to_string());
            if let Some(value) = state.value() {
                source_node
                    .set_shape(dot_writer::Shape::Circle)
                    .set_color(dot_writer::Color::Red)
                    .set_pen_width(3.0)
                    .set_label(&format!(
                        "{}\n{}",
                        index,
                        format!("{:?}", value).escape_default()
                    ));
            }
            source_node.id()
        };
        for branch in state.branches() {
            digraph
                .edge(source_id.clone(), &node_name(branch.target.as_usize()))
                .attributes()
                .set_label(&branch.range().to_string());
        }
        for target in state.epsilons() {
            digraph
                .edge(source_id.clone(), &node_name(target.as_usize()))
                .attributes()
                .set_label("ε");
        }
    }
}

/// Render a DFA to a graphviz dot format.
pub(crate) fn dfa_render<V: Debug, W: Write>(dfa: &Dfa<V>, label: &str, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    // Render the states of the DFA
    for (index, state) in dfa.states().iter().enumerate() {
        let mut source_node = digraph.node_auto();
        source_node.set_label(&index.to_string());
        if index == dfa.start().as_usize() {
            source_node
                .set_shape(dot_writer::Shape::Circle)
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if let Some(value) = state.value() {
            source_node
                .set_color(dot_writer::Color::Red)
                .set_pen_width(3.0)
                .set_label(&format!(
                    "{}\n{}",
                    index,
                    format!("{:?}", value).escape_default()
                ));
        }
    }
    // Render the transitions of the DFA
    for (index, state) in dfa.states().iter().enumerate() {
        for branch in state.branches() {
            digraph
                .edge(&node_name(index), &node_name(branch.target.as_usize()))
                .attributes()
                .set_label(&branch.range().to_string());
        }
    }
}
