//! Table-driven coverage for header mapping under schema drift.

use fleetcheck::{canonical_key, map_row, AuditEntry};

/// One header-mapping test case.
struct HeaderCase {
    /// Header text as it appears in the remote sheet.
    header: &'static str,
    /// Canonical field key it must map to.
    expected: &'static str,
}

/// Every accepted spelling across the schema versions seen in the wild.
const HEADER_CASES: &[HeaderCase] = &[
    HeaderCase { header: "ID", expected: "id" },
    HeaderCase { header: "id", expected: "id" },
    HeaderCase { header: "Data", expected: "date" },
    HeaderCase { header: "DATA", expected: "date" },
    HeaderCase { header: "Viatura", expected: "prefix" },
    HeaderCase { header: "Prefixo", expected: "prefix" },
    HeaderCase { header: "PREFIX", expected: "prefix" },
    HeaderCase { header: "Placa", expected: "plate" },
    HeaderCase { header: "PLATE", expected: "plate" },
    HeaderCase { header: "Periodicidade", expected: "checklistType" },
    HeaderCase { header: "Ciclo", expected: "checklistType" },
    HeaderCase { header: "TIPO", expected: "checklistType" },
    HeaderCase { header: "KM", expected: "km" },
    HeaderCase { header: "Quilometragem", expected: "km" },
    HeaderCase { header: "Conferente", expected: "inspector" },
    HeaderCase { header: "INSPETOR", expected: "inspector" },
    HeaderCase { header: "Resumo Status", expected: "itemsStatus" },
    HeaderCase { header: "STATUS", expected: "itemsStatus" },
    HeaderCase { header: "Detalhes Itens JSON", expected: "itemsDetail" },
    HeaderCase { header: "ITENS", expected: "itemsDetail" },
    HeaderCase { header: "Espelho Fiel JSON", expected: "fullData" },
    HeaderCase { header: "DATA_COMPLETA", expected: "fullData" },
    HeaderCase { header: "Observações", expected: "generalObservation" },
    HeaderCase { header: "OBS", expected: "generalObservation" },
    HeaderCase { header: "Foto da Conferência", expected: "screenshot" },
    HeaderCase { header: "Screenshot", expected: "screenshot" },
    HeaderCase { header: "IMAGEM", expected: "screenshot" },
    // unknown headers slugify instead of being dropped
    HeaderCase { header: "Batalhão Responsável", expected: "batalhão_responsável" },
    HeaderCase { header: " Extra Column ", expected: "extra_column" },
];

#[test]
fn every_accepted_header_spelling_maps() {
    for case in HEADER_CASES {
        assert_eq!(
            canonical_key(case.header),
            case.expected,
            "header '{}' mapped wrong",
            case.header
        );
    }
}

#[test]
fn header_order_permutations_yield_same_fields() {
    let values = ["r1", "01/02/2026", "ABT-01", "QRA1234"];
    let orders: [[&str; 4]; 3] = [
        ["ID", "Data", "Viatura", "Placa"],
        ["Placa", "ID", "Viatura", "Data"],
        ["Viatura", "Placa", "Data", "ID"],
    ];

    for order in orders {
        let headers: Vec<String> = order.iter().map(|s| s.to_string()).collect();
        let row_values: Vec<String> = order
            .iter()
            .map(|h| {
                // pair each header with the value belonging to its field
                let base = ["ID", "Data", "Viatura", "Placa"];
                let idx = base.iter().position(|b| b == h).unwrap();
                values[idx].to_string()
            })
            .collect();
        let row = map_row(&headers, &row_values);
        assert_eq!(row["id"], "r1");
        assert_eq!(row["date"], "01/02/2026");
        assert_eq!(row["prefix"], "ABT-01");
        assert_eq!(row["plate"], "QRA1234");
    }
}

#[test]
fn drifted_and_original_schemas_read_identically() {
    // same logical row under two historical header sets
    let v1_headers: Vec<String> = ["ID", "Data", "Viatura", "Placa", "KM"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let v2_headers: Vec<String> = ["Id", "DATA", "Prefixo", "PLATE", "Quilometragem"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let values: Vec<String> = ["r9", "05/03/2026", "UR-12", "QRB5678", "88000"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let a = AuditEntry::from_row(map_row(&v1_headers, &values));
    let b = AuditEntry::from_row(map_row(&v2_headers, &values));
    assert_eq!(a.id, b.id);
    assert_eq!(a.prefix, b.prefix);
    assert_eq!(a.plate, b.plate);
    assert_eq!(a.km, b.km);
    assert_eq!(a.km, "88000");
}

#[test]
fn all_canonical_fields_are_non_null_strings() {
    let headers: Vec<String> = [
        "ID",
        "Data",
        "Viatura",
        "Placa",
        "Periodicidade",
        "KM",
        "Conferente",
        "Resumo Status",
        "Detalhes Itens JSON",
        "Espelho Fiel JSON",
        "Observações",
        "Foto da Conferência",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // deliberately short row: trailing cells are missing entirely
    let values: Vec<String> = vec!["r1".to_string(), "01/02/2026".to_string()];
    let row = map_row(&headers, &values);

    assert_eq!(row.len(), headers.len());
    // missing cells became empty strings, never a literal null
    for (key, value) in &row {
        assert_ne!(value, "null", "field '{}' leaked a null", key);
    }
    assert_eq!(row["id"], "r1");
    assert_eq!(row["screenshot"], "");
}
