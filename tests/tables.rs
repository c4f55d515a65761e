#[cfg(test)]
mod schema {
    use deskboard::persistence::{DataType, Schema};

    fn _customer_schema() -> Schema {
        Schema::new(vec![
            ("customer_id", DataType::Number),
            ("customer_name", DataType::Text),
            ("region", DataType::Text),
        ])
    }

    #[test]
    fn schema_header_keeps_column_order() {
        let schema = _customer_schema();

        assert_eq!(
            schema.header(),
            vec!["customer_id", "customer_name", "region"]
        );
    }

    #[test]
    fn schema_position_finds_known_column() {
        let schema = _customer_schema();

        assert_eq!(schema.position("region"), Some(2));
        assert_eq!(schema.position("total_spent"), None);
    }

    #[test]
    fn schema_displays_with_datatypes() {
        let schema = _customer_schema();

        assert_eq!(
            format!("{}", schema),
            "customer_id (NUM) | customer_name (TXT) | region (TXT)"
        );
    }
}

#[cfg(test)]
mod value {
    use deskboard::persistence::{DataType, Value};

    #[test]
    fn value_parses_numeric_column_as_number() {
        let value = Value::parse("5400", DataType::Number);

        assert_eq!(value, Value::Number(5400.0));
    }

    #[test]
    fn value_degrades_bad_number_to_text() {
        let value = Value::parse("n/a", DataType::Number);

        assert_eq!(value, Value::Text("n/a".to_string()));
    }

    #[test]
    fn value_whole_number_displays_without_decimal() {
        assert_eq!(format!("{}", Value::Number(5400.0)), "5400");
        assert_eq!(format!("{}", Value::Number(19.5)), "19.5");
    }

    #[test]
    fn value_serializes_with_native_type() {
        let number = serde_json::to_string(&Value::Number(149.0)).unwrap();
        let text = serde_json::to_string(&Value::Text("West".to_string())).unwrap();

        assert_eq!(number, "149");
        assert_eq!(text, "\"West\"");
    }
}

#[cfg(test)]
mod table {
    use deskboard::persistence::{DataType, Schema, Table, Value};

    fn _seeded_table() -> Table {
        let schema = Schema::new(vec![
            ("customer_id", DataType::Number),
            ("customer_name", DataType::Text),
            ("total_spent", DataType::Number),
        ]);
        let mut table = Table::new("Customers", schema);

        table.push_record(vec![
            "1".to_string(),
            "John Smith".to_string(),
            "5400".to_string(),
        ]);
        table.push_record(vec![
            "2".to_string(),
            "Emily Jones".to_string(),
            "7200".to_string(),
        ]);

        table
    }

    #[test]
    fn table_parses_records_by_schema() {
        let table = _seeded_table();

        assert_eq!(table.count_rows(), 2);
        assert_eq!(table.rows()[0].0[0], Value::Number(1.0));
        assert_eq!(table.rows()[1].0[1], Value::Text("Emily Jones".to_string()));
    }

    #[test]
    fn table_pads_short_records() {
        let schema = Schema::new(vec![
            ("month", DataType::Text),
            ("revenue", DataType::Number),
        ]);
        let mut table = Table::new("Profit & Loss", schema);

        table.push_record(vec!["Jan".to_string()]);

        assert_eq!(table.rows()[0].0[1], Value::Text(String::new()));
    }

    #[test]
    fn table_records_round_trip_textually() {
        let table = _seeded_table();
        let records = table.records();

        assert_eq!(records[0], vec!["1", "John Smith", "5400"]);
        assert_eq!(records[1], vec!["2", "Emily Jones", "7200"]);
    }

    #[test]
    fn table_column_values_follow_row_order() {
        let table = _seeded_table();
        let spent = table.column_values("total_spent").unwrap();

        assert_eq!(spent[0].as_number(), Some(5400.0));
        assert_eq!(spent[1].as_number(), Some(7200.0));
        assert!(table.column_values("phone").is_none());
    }

    #[test]
    fn table_exports_json_objects_per_row() {
        let table = _seeded_table();
        let json = table.to_json();

        assert_eq!(json[0]["customer_name"], "John Smith");
        assert_eq!(json[1]["total_spent"], 7200);
    }
}

#[cfg(test)]
mod csv {
    use deskboard::persistence::{CsvReader, CsvWriter};

    fn _write_records(records: &[Vec<String>]) -> String {
        let mut out = Vec::new();
        let mut writer = CsvWriter::new(&mut out);
        for record in records {
            writer.write_record(record).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    fn _read_records(text: &str) -> Vec<Vec<String>> {
        CsvReader::new(text.as_bytes())
            .map(|record| record.unwrap())
            .collect()
    }

    #[test]
    fn csv_plain_fields_stay_unquoted() {
        let text = _write_records(&[vec!["1".to_string(), "West".to_string()]]);

        assert_eq!(text, "1,West\n");
    }

    #[test]
    fn csv_quotes_fields_that_need_it() {
        let text = _write_records(&[vec![
            "Lee, Ana".to_string(),
            "say \"hi\"".to_string(),
        ]]);

        assert_eq!(text, "\"Lee, Ana\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn csv_reader_handles_quoted_commas_and_quotes() {
        let records = _read_records("\"Lee, Ana\",\"say \"\"hi\"\"\"\n");

        assert_eq!(records, vec![vec!["Lee, Ana", "say \"hi\""]]);
    }

    #[test]
    fn csv_reader_handles_quoted_line_break() {
        let records = _read_records("\"two\nlines\",after\n");

        assert_eq!(records, vec![vec!["two\nlines", "after"]]);
    }

    #[test]
    fn csv_round_trip_preserves_every_field() {
        let original = vec![vec![
            "plain".to_string(),
            "with, comma".to_string(),
            "with \"quote\"".to_string(),
        ]];

        let text = _write_records(&original);
        let records = _read_records(&text);

        assert_eq!(records, original);
    }

    #[test]
    fn csv_reader_tolerates_missing_final_newline() {
        let records = _read_records("a,b\nc,d");

        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d"]]);
    }
}
