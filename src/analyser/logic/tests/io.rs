use crate::analyser::logic::types::REQUIRED_COLUMNS;
use crate::analyser::logic::{load_df, validate_schema};
use crate::error::AnalyserError;
use anyhow::Result;
use polars::prelude::*;
use std::path::PathBuf;

const HEADER: &str = "Name,Platform,Year_of_Release,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales,Critic_Score,Critic_Count,User_Score,User_Count,Developer,Rating";

fn write_temp_csv(file_name: &str, contents: &str) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!(
        "vgsales_{}_{file_name}",
        std::process::id()
    ));
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_load_missing_file() {
    let err = load_df(std::path::Path::new("definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, AnalyserError::FileNotFound(_)));
}

#[test]
fn test_load_valid_csv() -> Result<()> {
    let contents = format!(
        "{HEADER}\n\
         Wii Sports,Wii,2006,Sports,Nintendo,41.36,28.96,3.77,8.45,82.53,76,51,8,322,Nintendo,E\n\
         Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24,,,,,,\n\
         Wii Sports Resort,Wii,2009,Sports,Nintendo,15.61,10.93,3.28,2.95,32.77,80,73,tbd,192,Nintendo,E\n"
    );
    let path = write_temp_csv("valid.csv", &contents)?;

    let df = load_df(&path)?;
    let _ = std::fs::remove_file(&path);

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 16);
    Ok(())
}

#[test]
fn test_load_reports_every_missing_column() -> Result<()> {
    let path = write_temp_csv(
        "missing_cols.csv",
        "Name,Platform,Year_of_Release,NA_Sales,EU_Sales,JP_Sales,Global_Sales,Critic_Score,User_Score\n\
         Tetris,GB,1989,23.2,2.26,4.22,30.26,,\n",
    )?;

    let err = load_df(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    match err {
        AnalyserError::MissingColumns(cols) => {
            assert_eq!(cols, vec!["Genre".to_owned(), "Publisher".to_owned()]);
        }
        other => panic!("Expected MissingColumns, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_load_empty_file_is_parse_error() -> Result<()> {
    let path = write_temp_csv("empty.csv", "")?;
    let result = load_df(&path);
    let _ = std::fs::remove_file(&path);

    match result {
        Err(AnalyserError::Parse(_)) => {}
        other => panic!("Expected Parse error for an empty file, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_load_row_with_extra_fields_is_parse_error() -> Result<()> {
    let contents = format!(
        "{HEADER}\n\
         Wii Sports,Wii,2006,Sports,Nintendo,41.36,28.96,3.77,8.45,82.53,76,51,8,322,Nintendo,E\n\
         Mario Kart Wii,Wii,2008,Racing,Nintendo,15.68,12.76,3.79,3.29,35.52,82,73,8.3,709,Nintendo,E,extra,fields\n"
    );
    let path = write_temp_csv("ragged.csv", &contents)?;
    let result = load_df(&path);
    let _ = std::fs::remove_file(&path);

    match result {
        Err(AnalyserError::Parse(_)) => {}
        other => panic!("Expected Parse error for a ragged row, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_validate_schema_accepts_required_columns() -> Result<()> {
    let columns: Vec<Column> = REQUIRED_COLUMNS
        .iter()
        .map(|name| Column::from(Series::new((*name).into(), vec![0.0])))
        .collect();
    let df = DataFrame::new(columns)?;

    validate_schema(&df)?;
    Ok(())
}
