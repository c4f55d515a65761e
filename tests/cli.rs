#[cfg(test)]
mod parser {
    use deskboard::cli::parsers::Command;

    #[test]
    fn parser_accepts_tables() {
        assert!(matches!(Command::parse("tables"), Ok(Command::Tables)));
    }

    #[test]
    fn parser_accepts_view_with_spaced_table_name() {
        match Command::parse("view Profit & Loss") {
            Ok(Command::View { table_name, json }) => {
                assert_eq!(table_name, "Profit & Loss");
                assert!(!json);
            }
            _ => panic!("expected a view command"),
        }
    }

    #[test]
    fn parser_accepts_view_json_flag() {
        match Command::parse("view Customers --json") {
            Ok(Command::View { table_name, json }) => {
                assert_eq!(table_name, "Customers");
                assert!(json);
            }
            _ => panic!("expected a view command"),
        }
    }

    #[test]
    fn parser_accepts_add_customer() {
        assert!(matches!(
            Command::parse("add customer"),
            Ok(Command::AddCustomer)
        ));
    }

    #[test]
    fn parser_rejects_bare_view() {
        assert!(Command::parse("view").is_err());
        assert!(Command::parse("view --json").is_err());
    }

    #[test]
    fn parser_rejects_unknown_command() {
        assert!(Command::parse("drop table Customers").is_err());
    }
}
