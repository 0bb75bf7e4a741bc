//! Rule tables for query languages.

use super::{RuleSpec, rule};

pub(super) const SQL: &[RuleSpec] = &[
    rule(r"(?is)\bselect\b.+?\bfrom\b", &["select"]),
    rule(r"(?i)\bwhere\b", &["where"]),
    rule(r"(?i)\border\s+by\b", &["order_by"]),
    rule(r"(?i)\bgroup\s+by\b", &["group_by"]),
    rule(r"(?i)\bhaving\b", &["having"]),
    rule(r"(?i)\bselect\s+distinct\b", &["distinct"]),
    rule(r"(?i)\blimit\s+\d+|\btop\s+\d+|\bfetch\s+first\b", &["limit"]),
    rule(r"(?i)\b(?:count|sum|avg|min|max)\s*\(", &["aggregate_functions"]),
    rule(r"(?i)\bjoin\b", &["joins"]),
    rule(r"(?i)\b(?:left|right|full)\s+(?:outer\s+)?join\b", &["outer_joins"]),
    rule(r"(?i)\(\s*select\b", &["subqueries"]),
    rule(r"(?i)\bunion(?:\s+all)?\b|\bintersect\b|\bexcept\b", &["set_operations"]),
    rule(r"(?i)\binsert\s+into\b", &["insert"]),
    rule(r"(?i)\bupdate\s+\w+\s+set\b", &["update"]),
    rule(r"(?i)\bdelete\s+from\b", &["delete"]),
    rule(r"(?i)\bcreate\s+(?:temporary\s+)?table\b", &["create_table"]),
    rule(r"(?i)\balter\s+table\b", &["alter_table"]),
    rule(r"(?i)\bdrop\s+(?:table|database|view|index)\b", &["drop"]),
    rule(
        r"(?i)\bprimary\s+key\b|\bforeign\s+key\b|\bunique\b|\bnot\s+null\b|\bcheck\s*\(|\breferences\b",
        &["constraints"],
    ),
    rule(
        r"(?i)\b(?:integer|varchar|char|text|datetime|timestamp|decimal|numeric|boolean|bigint)\b|\bint\b",
        &["data_types"],
    ),
    rule(r"(?i)\bcreate\s+(?:unique\s+)?index\b", &["indexes"]),
    rule(r"(?i)\bcreate\s+(?:or\s+replace\s+)?view\b", &["views"]),
    rule(
        r"(?i)\b(?:begin|start)\s+transaction\b|\bcommit\b|\brollback\b|\bsavepoint\b",
        &["transactions"],
    ),
    rule(r"(?i)\bcase\s+(?:when\b|\w+\s+when\b)", &["case_expressions"]),
    rule(r"(?i)\blike\s+'", &["pattern_matching"]),
    rule(r"(?i)\bin\s*\(|\bbetween\s+\S+\s+and\b", &["in_between"]),
    rule(
        r"(?i)\bis\s+(?:not\s+)?null\b|\bcoalesce\s*\(|\bifnull\s*\(|\bnullif\s*\(",
        &["null_handling"],
    ),
    rule(r"(?i)\bas\s+\w+", &["aliases"]),
    rule(
        r"(?i)\b(?:concat|substring|substr|upper|lower|trim|length|replace)\s*\(",
        &["string_functions"],
    ),
    rule(
        r"(?i)\b(?:now|date_add|date_sub|datediff|extract|date_format)\s*\(|\bcurrent_(?:date|timestamp)\b",
        &["date_functions"],
    ),
    rule(
        r"(?i)\bover\s*\(|\b(?:row_number|rank|dense_rank|lag|lead|ntile)\s*\(",
        &["window_functions"],
    ),
    rule(r"(?i)\bwith\s+(?:recursive\s+)?\w+\s+as\s*\(", &["cte"]),
    rule(r"(?i)\bcreate\s+(?:database|schema)\b", &["create_database"]),
    rule(r"(?i)\b(?:grant|revoke)\b", &["access_control"]),
];

pub(super) const MYSQL: &[RuleSpec] = &[
    rule(
        r"(?i)\b(?:create|drop)\s+database\b|\buse\s+\w+\s*;|\bshow\s+databases\b",
        &["database_management"],
    ),
    rule(
        r"(?i)\bcreate\s+table\b|\bshow\s+tables\b|\bdesc(?:ribe)?\s+\w+",
        &["table_management"],
    ),
    rule(r"(?i)\balter\s+table\b", &["alter_table"]),
    rule(r"(?is)\bselect\b.+?\bfrom\b", &["select"]),
    rule(r"(?i)\bwhere\b", &["filtering"]),
    rule(r"(?i)\border\s+by\b", &["sorting"]),
    rule(r"(?i)\blimit\s+\d+", &["limit"]),
    rule(r"(?i)\bgroup\s+by\b|\bhaving\b", &["grouping"]),
    rule(
        r"(?i)\b(?:count|sum|avg|min|max|group_concat)\s*\(",
        &["aggregate_functions"],
    ),
    rule(r"(?i)\bjoin\b", &["joins"]),
    rule(r"(?i)\(\s*select\b", &["subqueries"]),
    rule(
        r"(?i)\binsert\s+(?:ignore\s+)?into\b|\breplace\s+into\b",
        &["insert"],
    ),
    rule(r"(?i)\bupdate\s+\w+\s+set\b", &["update"]),
    rule(r"(?i)\bdelete\s+from\b|\btruncate\s+(?:table\s+)?\w+", &["delete"]),
    rule(
        r"(?i)\bprimary\s+key\b|\bforeign\s+key\b|\bunique\b|\bnot\s+null\b|\breferences\b",
        &["constraints"],
    ),
    rule(r"(?i)\bauto_increment\b", &["auto_increment"]),
    rule(
        r"(?i)\bcreate\s+(?:unique\s+|fulltext\s+)?index\b",
        &["indexes"],
    ),
    rule(r"(?i)\bcreate\s+(?:or\s+replace\s+)?view\b", &["views"]),
    rule(
        r"(?i)\bcreate\s+procedure\b|\bcall\s+\w+\s*\(|\bdelimiter\b",
        &["stored_procedures"],
    ),
    rule(r"(?i)\bcreate\s+function\b", &["functions"]),
    rule(r"(?i)\bcreate\s+trigger\b", &["triggers"]),
    rule(
        r"(?i)\bstart\s+transaction\b|\bcommit\b|\brollback\b|\bsavepoint\b",
        &["transactions"],
    ),
    rule(
        r"(?i)\bcreate\s+user\b|\bgrant\b|\brevoke\b|\bflush\s+privileges\b",
        &["user_management"],
    ),
    rule(r"\bmysqldump\b|(?i:\bsource\s+\S+\.sql\b)", &["backup_restore"]),
    rule(r"\bmysql\s+-[uph]|\bsudo\s+mysql\b|\bmysql\s+<", &["client_commands"]),
    rule(
        r"(?i)\b(?:concat|substring|upper|lower|trim|length|replace)\s*\(",
        &["string_functions"],
    ),
    rule(
        r"(?i)\b(?:now|curdate|curtime|date_add|date_sub|datediff|date_format)\s*\(",
        &["date_functions"],
    ),
    rule(r"(?i)\bengine\s*=\s*\w+", &["storage_engines"]),
    rule(r"(?i)\b(?:charset|character\s+set|collate)\b", &["character_sets"]),
    rule(r"(?i)\bexplain\s+select\b", &["query_optimization"]),
    rule(r"(?i)\bload\s+data\b|\binto\s+outfile\b", &["import_export"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::language::LanguageKey;
    use crate::skills::patterns::PatternExtractor;

    #[test]
    fn multiline_select_with_join() {
        let ex = PatternExtractor::compile(LanguageKey::Sql, SQL);
        let skills = ex.scan(
            "SELECT o.id, c.name\n\
             FROM orders o\n\
             LEFT JOIN customers c ON c.id = o.customer_id\n\
             ORDER BY o.id;",
        );
        for tag in ["sql/select", "sql/joins", "sql/outer_joins", "sql/order_by"] {
            assert!(skills.contains(tag), "missing {tag}");
        }
        assert!(!skills.contains("sql/group_by"));
    }

    #[test]
    fn mysql_schema() {
        let ex = PatternExtractor::compile(LanguageKey::Mysql, MYSQL);
        let skills = ex.scan(
            "CREATE TABLE users (\n  id INT AUTO_INCREMENT PRIMARY KEY\n) ENGINE=InnoDB;",
        );
        assert!(skills.contains("mysql/table_management"));
        assert!(skills.contains("mysql/auto_increment"));
        assert!(skills.contains("mysql/constraints"));
        assert!(skills.contains("mysql/storage_engines"));
    }
}
