//! CSV layout accepted by the sales importer

/// File name of the downloadable template
pub const TEMPLATE_FILE_NAME: &str = "plantilla_ventas.csv";

/// Header row expected by the backend
pub const TEMPLATE_HEADERS: [&str; 5] = ["Fecha", "Cliente", "Producto", "Cantidad", "Precio Unitario"];

const SAMPLE_ROWS: [[&str; 5]; 3] = [
    ["2023-01-15", "Empresa Demo S.A.", "Laptop Pro X1", "5", "1200.00"],
    ["2023-02-20", "Empresa Demo S.A.", "Monitor 4K", "10", "350.50"],
    ["2023-03-10", "Tech Corp", "Teclado Mecánico", "20", "85.00"],
];

/// Template contents: header plus three sample rows, comma separated, no trailing newline
pub fn template_csv() -> String {
    std::iter::once(TEMPLATE_HEADERS)
        .chain(SAMPLE_ROWS)
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only `.csv` files are offered to the backend
pub fn is_csv_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_layout() {
        let csv = template_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Fecha,Cliente,Producto,Cantidad,Precio Unitario");
        assert_eq!(lines[3], "2023-03-10,Tech Corp,Teclado Mecánico,20,85.00");
    }

    #[test]
    fn test_csv_file_name_check() {
        assert!(is_csv_file_name("ventas.csv"));
        assert!(is_csv_file_name("VENTAS.CSV"));
        assert!(!is_csv_file_name("ventas.xlsx"));
    }
}
