use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/sample_certificates.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let certificates = catalog.get("certificates").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'certificates' field\n\
             The catalog must have a top-level 'certificates' array.\n"
        );
    });

    let certs = certificates.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'certificates' must be an array\n\
             Got: {certificates}\n"
        );
    });

    let total_materials = validate_certificates(certs);

    println!(
        "cargo:warning=Validated catalog: {} certificates, {total_materials} total materials",
        certs.len()
    );
}

fn validate_certificates(certs: &[serde_json::Value]) -> usize {
    let mut total_materials = 0;
    let mut seen_ids = std::collections::HashSet::new();

    for (i, cert) in certs.iter().enumerate() {
        let cert_id = cert
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_certificate_fields(cert, cert_id, i);

        assert!(
            seen_ids.insert(cert_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate certificate id '{cert_id}' (index {i})\n\
             Certificate ids must be unique across the catalog.\n"
        );

        if let Some(materials) = cert.get("materials").and_then(|m| m.as_array()) {
            for (j, material) in materials.iter().enumerate() {
                assert!(
                    material.as_str().is_some_and(|s| !s.trim().is_empty()),
                    "\n\nCATALOG BUILD ERROR: Certificate '{cert_id}' material {j} must be a non-empty string\n"
                );
            }
            total_materials += materials.len();
        }
    }

    total_materials
}

fn validate_certificate_fields(cert: &serde_json::Value, cert_id: &str, index: usize) {
    assert!(
        cert.get("id")
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.is_empty()),
        "\n\nCATALOG BUILD ERROR: Certificate at index {index} missing non-empty 'id' field\n"
    );
    assert!(
        cert.get("number").is_some(),
        "\n\nCATALOG BUILD ERROR: Certificate '{cert_id}' (index {index}) missing 'number' field\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/sample_certificates.json");
    println!("cargo:rerun-if-changed=build.rs");
}
