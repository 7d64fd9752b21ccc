use super::Host;
use crate::Result;
use crate::export::Table;
use crate::model::TableKind;
use clap::Parser;
use ohno::IntoAppError;
use std::io::Write;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Only show the layout of this table
    #[arg(long, value_name = "KIND")]
    pub table: Option<TableKind>,
}

/// Print the file name and the quoted header line of each requested table
pub fn print_schema<H: Host>(host: &mut H, args: &SchemaArgs) -> Result<()> {
    let kinds: Vec<TableKind> = args.table.map_or_else(|| TableKind::iter().collect(), |kind| vec![kind]);

    for kind in kinds {
        let _ = writeln!(host.output(), "{}", kind.file_name());
        Table::new(kind.entity(), kind.csv_header())
            .write_to(host.output(), true)
            .into_app_err_with(|| format!("printing the layout of {}", kind.file_name()))?;
    }

    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::TestHost;

    #[test]
    fn test_single_table() {
        let mut host = TestHost::new();
        print_schema(&mut host, &SchemaArgs { table: Some(TableKind::Periods) }).unwrap();
        insta::assert_snapshot!(host.output_text(), @r#"
        periodos.csv
        "descricao"
        "#);
    }

    #[test]
    fn test_error_table() {
        let mut host = TestHost::new();
        print_schema(&mut host, &SchemaArgs { table: Some(TableKind::Errors) }).unwrap();
        insta::assert_snapshot!(host.output_text(), @r#"
        erros.csv
        "periodo","turma","atividade","estudante","exercicio","tipo","ocorrencias"
        "#);
    }

    #[test]
    fn test_all_tables() {
        let mut host = TestHost::new();
        print_schema(&mut host, &SchemaArgs { table: None }).unwrap();

        let text = host.output_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        for (pair, kind) in lines.chunks(2).zip(TableKind::iter()) {
            assert_eq!(pair[0], kind.file_name());
            assert_eq!(pair[1].split(',').count(), kind.csv_header().len());
        }
        assert!(host.error_text().is_empty());
    }
}
