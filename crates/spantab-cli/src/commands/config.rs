use spantab_core::error::SpantabError;
use spantab_core::options::{load_options, TableOptions};
use std::path::Path;

pub fn schema() -> Result<(), SpantabError> {
    print!(
        r#"Option File Reference
=====================

An option file tells `spantab extract` which table to read and what to do
with it. Every field is optional; missing fields take the default shown.

  url                (string, null)       Page holding the table. http(s),
                                          file:// or a local path. May be
                                          given on the command line instead.
  table_index        (integer, 0)         Which of the matching tables to read.
  table_filter       (object, {{}})         Attributes the table must carry.
                                          "class" matches any one class of the
                                          table; other attributes match exactly.
  column_header      (bool, false)        The first row's <th> cells label
                                          the columns.
  row_header         (bool, false)        Each row's leading <th> cell labels
                                          the row.
  column_keep        (array, null)        Column positions to keep.
                                          null keeps all, [] keeps none.
  row_keep           (array, null)        Row positions to keep.
                                          null keeps all, [] keeps none.
  column_link_scope  (array, [])          Columns whose links are followed.
                                          [] follows none, null follows all.
  row_link_scope     (array, [])          Rows whose links are followed.
                                          Only one of the two scopes may be set.
  extract            (array, [])          Extraction specs (see below). When
                                          present the result is a value list
                                          instead of the table.
  on_link            (object, null)       Options for the lookup run on every
                                          followed link. Same fields, nested.
                                          Required when a link scope is set.

Each extraction spec:
  pattern            (string, required)   Regular expression searched for in
                                          every cell, column by column.
  row_offset         (integer, 0)         Rows from the matching cell to the
                                          value. May be negative.
  col_offset         (integer, 0)         Columns from the matching cell to
                                          the value. May be negative.
  max_matches        (integer, null)      Use only the first N matches.

Values found on a linked page are appended to the row holding the link.

Example:
{{
  "table_filter": {{ "class": "animal-table" }},
  "column_header": true,
  "column_link_scope": [1],
  "on_link": {{
    "table_filter": {{ "class": "infobox" }},
    "extract": [
      {{ "pattern": "Conservation status", "row_offset": 1, "max_matches": 1 }}
    ]
  }}
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SpantabError> {
    let options = load_options(file)?;

    println!("Options in {} are valid.", file.display());
    describe(&options, 1);

    if options.url.is_none() {
        println!("\nNote: no url set; pass one to `spantab extract`.");
    }

    Ok(())
}

fn describe(options: &TableOptions, depth: usize) {
    let indent = "  ".repeat(depth);

    let filter = if options.table_filter.is_empty() {
        "any table".to_string()
    } else {
        options
            .table_filter
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("{indent}Table: #{} of {}", options.table_index, filter);

    if !options.extract.is_empty() {
        println!("{indent}Extraction specs: {}", options.extract.len());
    }

    if let Some(nested) = &options.on_link {
        let scope = match (&options.column_link_scope, &options.row_link_scope) {
            (None, _) => "every column".to_string(),
            (_, None) => "every row".to_string(),
            (Some(cols), _) if !cols.is_empty() => format!("columns {cols:?}"),
            (_, Some(rows)) if !rows.is_empty() => format!("rows {rows:?}"),
            _ => "no cells (no link scope set)".to_string(),
        };
        println!("{indent}Follows links in {scope} into:");
        describe(nested, depth + 1);
    }
}
