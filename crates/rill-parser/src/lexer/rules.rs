//! Scanner group and rule definitions.
//!
//! This file is the lexical grammar. Each group lists its rules in priority
//! order: the scanner takes the longest match, and on equal length the rule
//! declared first wins, with a group's own rules outranking inherited ones.
//!
//! Group map:
//!
//! ```text
//! NORMAL ─────────────┬─ IDENT_SUFFIX_CHECK        (after var/cons/_)
//!   ^ parent of       ├─ OPERATOR_MOD_CHECK ── parent: OPERATOR_SUFFIX_CHECK
//! PARENSED            ├─ NUMBER_PHASE_2
//!                     ├─ TEXT
//!                     ├─ PARENSED                  (after `(`)
//!                     └─ NEWLINE                   (after `\n`)
//! ```

use crate::group::{GroupId, Registry};
use crate::pattern::{any, any_of, char_, eof, literal, none_of, range, Pattern};

use super::Parser;

/// Characters that legally terminate an identifier. Anything else directly
/// after one glues into an `InvalidSuffix`.
const IDENT_BREAKER: &str = "^`!@#$%^&*()-=+[]{}|;:<>,./ \t\r\n\\";

/// Characters operators are built from.
const OPERATOR_CHARS: &str = "!$%&*+-/<>?^~|:\\";

/// Ids of the built-in groups.
pub(crate) struct GroupSet {
    pub normal: GroupId,
    pub ident_suffix: GroupId,
    pub operator_modifier: GroupId,
    pub operator_suffix: GroupId,
    pub number_phase2: GroupId,
    pub text: GroupId,
    pub parensed: GroupId,
    pub newline: GroupId,
}

/// Define all groups and register every rule.
pub(crate) fn install(registry: &mut Registry) -> GroupSet {
    let groups = GroupSet {
        normal: registry.define("NORMAL"),
        ident_suffix: registry.define("IDENT_SUFFIX_CHECK"),
        operator_modifier: registry.define("OPERATOR_MOD_CHECK"),
        operator_suffix: registry.define("OPERATOR_SUFFIX_CHECK"),
        number_phase2: registry.define("NUMBER_PHASE_2"),
        text: registry.define("TEXT"),
        parensed: registry.define("PARENSED"),
        newline: registry.define("NEWLINE"),
    };
    registry.set_parent(groups.operator_modifier, groups.operator_suffix);
    registry.set_parent(groups.parensed, groups.normal);

    let space = || char_(' ');
    let newline = || char_('\n');
    let lower = || range('a', 'z');
    let upper = || range('A', 'Z');
    let digit = || range('0', '9');
    let alpha_num = || lower() | upper() | digit();
    let ident_char = || alpha_num() | char_('_');
    let prime = || char_('\'');
    let text_char = || none_of("'`\n\\");

    let variable = lower() >> ident_char().many() >> prime().many();
    let constructor = upper() >> ident_char().many() >> prime().many();
    let operator = any_of(OPERATOR_CHARS).many1();
    // Operators that never take the `=` modifier; `..`/`...` outrank `.` and
    // `==`/`>=`/`<=`/`/=` outrank `=` by longest match.
    let no_mod_operator = literal("=")
        | literal("==")
        | literal(">=")
        | literal("<=")
        | literal("/=")
        | literal(",")
        | literal(".")
        | literal("..")
        | literal("...");
    let operator_err_suffix = (any_of(OPERATOR_CHARS) | any_of("=,.")).many1();
    let ident_err_suffix = none_of(IDENT_BREAKER).many1();
    let number = digit().many1();
    let number_base_suffix = char_('_') >> alpha_num().many1();
    let quote = prime();
    let triple_quote = literal("'''");
    let plain_segment = text_char().many1();
    // `\u` plus up to four following characters; longest capture wins.
    let escape_u16 = literal("\\u")
        >> text_char().opt()
        >> text_char().opt()
        >> text_char().opt()
        >> text_char().opt();
    let group_open = char_('(') >> space().many();
    let empty_line = space().many() >> newline();
    let eof_line = space().many() >> eof();
    let line_start = space().many();

    let g = registry.group_mut(groups.normal);
    g.rule(space().many1()).run(Parser::on_whitespace);
    g.rule(newline()).run(Parser::on_newline);
    g.rule(variable).run(Parser::on_var);
    g.rule(constructor).run(Parser::on_cons);
    g.rule(char_('_')).run(Parser::on_wildcard);
    g.rule(operator).run(Parser::on_operator);
    g.rule(no_mod_operator).run(Parser::on_no_mod_operator);
    g.rule(number).run(Parser::on_number);
    g.rule(triple_quote.clone()).run(Parser::on_text_begin_triple);
    g.rule(quote.clone()).run(Parser::on_text_begin_single);
    g.rule(group_open).run(Parser::on_group_begin);
    g.rule(char_(')')).run(Parser::on_unmatched_close);
    g.rule(eof()).run(Parser::on_eof);
    g.rule(any()).run(Parser::on_unrecognized);

    let g = registry.group_mut(groups.ident_suffix);
    g.rule(ident_err_suffix).run(Parser::on_invalid_suffix);
    g.rule(Pattern::Always).run(Parser::on_no_suffix);

    let g = registry.group_mut(groups.operator_modifier);
    g.rule(char_('=')).run(Parser::on_modifier);

    let g = registry.group_mut(groups.operator_suffix);
    g.rule(operator_err_suffix).run(Parser::on_invalid_suffix);
    g.rule(Pattern::Always).run(Parser::on_no_suffix);

    let g = registry.group_mut(groups.number_phase2);
    g.rule(number_base_suffix).run(Parser::on_number_base);
    g.rule(char_('_')).run(Parser::on_dangling_base);
    g.rule(Pattern::Always).run(Parser::on_number_done);

    let g = registry.group_mut(groups.text);
    g.rule(triple_quote).run(Parser::on_text_quote_triple);
    g.rule(quote).run(Parser::on_text_quote_single);
    g.rule(escape_u16).run(Parser::on_text_escape_u16);
    g.rule(plain_segment).run(Parser::on_text_plain);
    g.rule(newline()).run(Parser::on_text_unclosed);
    g.rule(eof()).run(Parser::on_text_unclosed);

    let g = registry.group_mut(groups.parensed);
    g.rule(char_(')')).run(Parser::on_group_end);
    g.rule(eof()).run(Parser::on_group_eof);

    let g = registry.group_mut(groups.newline);
    g.rule(empty_line).run(Parser::on_empty_line);
    g.rule(eof_line).run(Parser::on_eof_line);
    g.rule(line_start).run(Parser::on_block_newline);

    groups
}
