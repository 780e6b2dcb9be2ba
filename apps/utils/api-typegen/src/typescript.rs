//! TypeScript declarations from an OpenAPI 3 document.
//!
//! Output follows the `paths` / `components` / `operations` layout consumed
//! by `openapi-fetch` style clients, so each path and method maps onto a
//! typed request and typed responses.

use serde_json::{Map, Value};

use crate::error::{TypegenError, TypegenResult};

const INDENT: &str = "    ";
const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];
const PARAMETER_LOCATIONS: [&str; 4] = ["query", "header", "path", "cookie"];

pub struct TypeScriptGenerator<'a> {
    document: &'a Value,
}

impl<'a> TypeScriptGenerator<'a> {
    /// Checks the document is an OpenAPI 3.x object before anything is generated.
    pub fn new(document: &'a Value) -> TypegenResult<Self> {
        let root = document
            .as_object()
            .ok_or_else(|| TypegenError::InvalidDocument("expected a JSON object".into()))?;

        let version = root
            .get("openapi")
            .and_then(Value::as_str)
            .ok_or_else(|| TypegenError::InvalidDocument("missing `openapi` version".into()))?;
        if !version.starts_with("3.") {
            return Err(TypegenError::InvalidDocument(format!(
                "unsupported OpenAPI version {}",
                version
            )));
        }

        if root.get("paths").is_some_and(|paths| !paths.is_object()) {
            return Err(TypegenError::InvalidDocument("`paths` must be an object".into()));
        }

        Ok(Self { document })
    }

    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.banner());
        output.push('\n');
        output.push_str(&self.paths_section());
        output.push('\n');
        output.push_str(&self.components_section());
        output.push('\n');
        output.push_str(&self.operations_section());

        output
    }

    fn banner(&self) -> String {
        let info = self.document.get("info");
        let title = info
            .and_then(|i| i.get("title"))
            .and_then(Value::as_str)
            .unwrap_or("API");
        let version = info
            .and_then(|i| i.get("version"))
            .and_then(Value::as_str)
            .unwrap_or("unversioned");

        let mut banner = format!(
            "/**\n * This file was auto-generated by api-typegen from {} {}.\n",
            sanitize_comment(title),
            sanitize_comment(version)
        );
        banner.push_str(" * Do not make direct changes to the file.\n */\n");
        banner
    }

    fn paths(&self) -> Vec<(&'a String, &'a Value)> {
        self.document
            .get("paths")
            .and_then(Value::as_object)
            .map(|paths| paths.iter().collect())
            .unwrap_or_default()
    }

    /// `(operationId, path item, operation)` in document order.
    fn operations(&self) -> Vec<(String, &'a Value, &'a Value)> {
        let mut operations = Vec::new();
        for (path, item) in self.paths() {
            for method in METHODS {
                if let Some(operation) = item.get(method) {
                    operations.push((operation_id(method, path, operation), item, operation));
                }
            }
        }
        operations
    }

    fn paths_section(&self) -> String {
        let mut output = String::from("export interface paths {\n");

        for (path, item) in self.paths() {
            let methods: Vec<String> = METHODS
                .iter()
                .filter_map(|method| {
                    item.get(*method).map(|operation| {
                        format!(
                            "{}{}: operations[{}];\n",
                            indent(2),
                            method,
                            quote(&operation_id(method, path, operation))
                        )
                    })
                })
                .collect();

            if methods.is_empty() {
                output.push_str(&format!("{}{}: Record<string, never>;\n", indent(1), quote(path)));
                continue;
            }

            output.push_str(&format!("{}{}: {{\n", indent(1), quote(path)));
            for line in methods {
                output.push_str(&line);
            }
            output.push_str(&format!("{}}};\n", indent(1)));
        }

        output.push_str("}\n");
        output
    }

    fn components_section(&self) -> String {
        let components = self.document.get("components").and_then(Value::as_object);
        let section = |name: &str| {
            components
                .and_then(|c| c.get(name))
                .and_then(Value::as_object)
        };

        let mut output = String::from("export interface components {\n");

        output.push_str(&self.component_group(
            "schemas",
            section("schemas"),
            |schema, depth| self.ts_type(schema, depth),
        ));
        output.push_str(&self.component_group(
            "responses",
            section("responses"),
            |response, depth| self.response_type(response, depth),
        ));
        output.push_str(&self.component_group(
            "parameters",
            section("parameters"),
            |parameter, depth| {
                parameter
                    .get("schema")
                    .map(|schema| self.ts_type(schema, depth))
                    .unwrap_or_else(|| "unknown".to_string())
            },
        ));
        output.push_str(&self.component_group(
            "requestBodies",
            section("requestBodies"),
            |body, depth| self.content_holder(body, depth),
        ));

        output.push_str("}\n");
        output
    }

    fn component_group(
        &self,
        name: &str,
        entries: Option<&'a Map<String, Value>>,
        render: impl Fn(&'a Value, usize) -> String,
    ) -> String {
        let Some(entries) = entries.filter(|e| !e.is_empty()) else {
            return format!("{}{}: never;\n", indent(1), name);
        };

        let mut output = format!("{}{}: {{\n", indent(1), name);
        for (key, value) in entries {
            if let Some(doc) = description(value) {
                output.push_str(&format!("{}{}\n", indent(2), doc));
            }
            output.push_str(&format!(
                "{}{}: {};\n",
                indent(2),
                property_key(key),
                render(value, 2)
            ));
        }
        output.push_str(&format!("{}}};\n", indent(1)));
        output
    }

    fn operations_section(&self) -> String {
        let mut output = String::from("export interface operations {\n");

        for (id, path_item, operation) in self.operations() {
            output.push_str(&format!("{}{}: {{\n", indent(1), property_key(&id)));
            output.push_str(&self.parameters(path_item, operation, 2));
            output.push_str(&self.request_body(operation, 2));
            output.push_str(&self.responses(operation, 2));
            output.push_str(&format!("{}}};\n", indent(1)));
        }

        output.push_str("}\n");
        output
    }

    fn parameters(&self, path_item: &'a Value, operation: &'a Value, depth: usize) -> String {
        // Operation-level parameters override path-level ones with the same name and location.
        let mut merged: Vec<&'a Value> = Vec::new();
        let declared = path_item
            .get("parameters")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .chain(
                operation
                    .get("parameters")
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten(),
            );
        for parameter in declared {
            let parameter = self.resolve(parameter);
            let key = (parameter.get("in"), parameter.get("name"));
            merged.retain(|p| (p.get("in"), p.get("name")) != key);
            merged.push(parameter);
        }

        let mut output = format!("{}parameters: {{\n", indent(depth));
        for location in PARAMETER_LOCATIONS {
            let in_location: Vec<&Value> = merged
                .iter()
                .copied()
                .filter(|p| p.get("in").and_then(Value::as_str) == Some(location))
                .collect();

            if in_location.is_empty() {
                output.push_str(&format!("{}{}?: never;\n", indent(depth + 1), location));
                continue;
            }

            let any_required = in_location.iter().any(|p| is_required(p));
            output.push_str(&format!(
                "{}{}{}: {{\n",
                indent(depth + 1),
                location,
                if any_required { "" } else { "?" }
            ));
            for parameter in in_location {
                let name = parameter.get("name").and_then(Value::as_str).unwrap_or_default();
                if let Some(doc) = description(parameter) {
                    output.push_str(&format!("{}{}\n", indent(depth + 2), doc));
                }
                let ty = parameter
                    .get("schema")
                    .map(|schema| self.ts_type(schema, depth + 2))
                    .unwrap_or_else(|| "unknown".to_string());
                output.push_str(&format!(
                    "{}{}{}: {};\n",
                    indent(depth + 2),
                    property_key(name),
                    if is_required(parameter) { "" } else { "?" },
                    ty
                ));
            }
            output.push_str(&format!("{}}};\n", indent(depth + 1)));
        }
        output.push_str(&format!("{}}};\n", indent(depth)));
        output
    }

    fn request_body(&self, operation: &'a Value, depth: usize) -> String {
        let Some(body) = operation.get("requestBody") else {
            return format!("{}requestBody?: never;\n", indent(depth));
        };

        let required = is_required(self.resolve(body));
        let ty = match reference(body) {
            Some(r) => ref_type(r),
            None => self.content_holder(body, depth),
        };
        format!(
            "{}requestBody{}: {};\n",
            indent(depth),
            if required { "" } else { "?" },
            ty
        )
    }

    fn responses(&self, operation: &'a Value, depth: usize) -> String {
        let Some(responses) = operation
            .get("responses")
            .and_then(Value::as_object)
            .filter(|r| !r.is_empty())
        else {
            return format!("{}responses: never;\n", indent(depth));
        };

        let mut output = format!("{}responses: {{\n", indent(depth));
        for (status, response) in responses {
            if let Some(doc) = description(response) {
                output.push_str(&format!("{}{}\n", indent(depth + 1), doc));
            }
            output.push_str(&format!(
                "{}{}: {};\n",
                indent(depth + 1),
                property_key(status),
                self.response_type(response, depth + 1)
            ));
        }
        output.push_str(&format!("{}}};\n", indent(depth)));
        output
    }

    fn response_type(&self, response: &'a Value, depth: usize) -> String {
        if let Some(r) = reference(response) {
            return ref_type(r);
        }

        let mut lines = vec![format!(
            "{}headers: {{\n{}[name: string]: unknown;\n{}}};",
            indent(depth + 1),
            indent(depth + 2),
            indent(depth + 1)
        )];
        lines.push(self.content_line(response, depth + 1));

        format!("{{\n{}\n{}}}", lines.join("\n"), indent(depth))
    }

    /// `{ content: ... }` for request bodies.
    fn content_holder(&self, holder: &'a Value, depth: usize) -> String {
        format!("{{\n{}\n{}}}", self.content_line(holder, depth + 1), indent(depth))
    }

    fn content_line(&self, holder: &'a Value, depth: usize) -> String {
        let Some(content) = holder
            .get("content")
            .and_then(Value::as_object)
            .filter(|c| !c.is_empty())
        else {
            return format!("{}content?: never;", indent(depth));
        };

        let mut output = format!("{}content: {{\n", indent(depth));
        for (media_type, media) in content {
            let ty = media
                .get("schema")
                .map(|schema| self.ts_type(schema, depth + 1))
                .unwrap_or_else(|| "unknown".to_string());
            output.push_str(&format!("{}{}: {};\n", indent(depth + 1), quote(media_type), ty));
        }
        output.push_str(&format!("{}}};", indent(depth)));
        output
    }

    /// Follows a local `$ref`, returning the value unchanged when it is not one.
    fn resolve(&self, value: &'a Value) -> &'a Value {
        reference(value)
            .and_then(|r| r.strip_prefix('#'))
            .and_then(|pointer| self.document.pointer(pointer))
            .unwrap_or(value)
    }

    /// Type expression for a schema whose line sits at `depth`.
    pub fn ts_type(&self, schema: &'a Value, depth: usize) -> String {
        let Some(object) = schema.as_object() else {
            return match schema {
                Value::Bool(false) => "never".to_string(),
                _ => "unknown".to_string(),
            };
        };

        if let Some(r) = reference(schema) {
            return ref_type(r);
        }

        let mut ty = if let Some(values) = object.get("enum").and_then(Value::as_array) {
            union(values.iter().map(literal).collect())
        } else if let Some(value) = object.get("const") {
            literal(value)
        } else if let Some(variants) = object
            .get("oneOf")
            .or_else(|| object.get("anyOf"))
            .and_then(Value::as_array)
        {
            union(variants.iter().map(|v| self.ts_type(v, depth)).collect())
        } else if let Some(parts) = object.get("allOf").and_then(Value::as_array) {
            intersection(parts.iter().map(|p| self.ts_type(p, depth)).collect())
        } else {
            self.typed(object, depth)
        };

        if object.get("nullable") == Some(&Value::Bool(true)) {
            ty = union(vec![ty, "null".to_string()]);
        }

        ty
    }

    fn typed(&self, object: &'a Map<String, Value>, depth: usize) -> String {
        match object.get("type") {
            Some(Value::String(name)) => self.primitive(name, object, depth),
            Some(Value::Array(names)) => union(
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|name| self.primitive(name, object, depth))
                    .collect(),
            ),
            _ if object.contains_key("properties")
                || object.contains_key("additionalProperties") =>
            {
                self.object_type(object, depth)
            }
            _ if object.contains_key("items") => self.array_type(object, depth),
            _ => "unknown".to_string(),
        }
    }

    fn primitive(&self, name: &str, object: &'a Map<String, Value>, depth: usize) -> String {
        match name {
            "string" => "string".to_string(),
            "integer" | "number" => "number".to_string(),
            "boolean" => "boolean".to_string(),
            "null" => "null".to_string(),
            "array" => self.array_type(object, depth),
            "object" => self.object_type(object, depth),
            _ => "unknown".to_string(),
        }
    }

    fn array_type(&self, object: &'a Map<String, Value>, depth: usize) -> String {
        let item = object
            .get("items")
            .map(|items| self.ts_type(items, depth))
            .unwrap_or_else(|| "unknown".to_string());

        if has_top_level_operator(&item) {
            format!("({})[]", item)
        } else {
            format!("{}[]", item)
        }
    }

    fn object_type(&self, object: &'a Map<String, Value>, depth: usize) -> String {
        let required: Vec<&str> = object
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut lines = Vec::new();
        if let Some(properties) = object.get("properties").and_then(Value::as_object) {
            for (name, property) in properties {
                if let Some(doc) = description(property) {
                    lines.push(format!("{}{}", indent(depth + 1), doc));
                }
                lines.push(format!(
                    "{}{}{}: {};",
                    indent(depth + 1),
                    property_key(name),
                    if required.contains(&name.as_str()) { "" } else { "?" },
                    self.ts_type(property, depth + 1)
                ));
            }
        }

        let additional = object.get("additionalProperties");
        match additional {
            Some(Value::Bool(true)) => {
                lines.push(format!("{}[key: string]: unknown;", indent(depth + 1)));
            }
            Some(schema @ Value::Object(_)) => {
                lines.push(format!(
                    "{}[key: string]: {};",
                    indent(depth + 1),
                    self.ts_type(schema, depth + 1)
                ));
            }
            _ => {}
        }

        if lines.is_empty() {
            return match additional {
                Some(Value::Bool(false)) => "Record<string, never>".to_string(),
                _ => "{ [key: string]: unknown }".to_string(),
            };
        }

        format!("{{\n{}\n{}}}", lines.join("\n"), indent(depth))
    }
}

/// Generates declarations for `document` in one step.
pub fn generate(document: &Value) -> TypegenResult<String> {
    Ok(TypeScriptGenerator::new(document)?.generate())
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

fn quote(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    let numeric = !name.is_empty() && name.chars().all(|c| c.is_ascii_digit());

    if identifier || numeric {
        name.to_string()
    } else {
        quote(name)
    }
}

fn reference(value: &Value) -> Option<&str> {
    value.get("$ref").and_then(Value::as_str)
}

/// `#/components/schemas/Name` becomes `components["schemas"]["Name"]`.
fn ref_type(reference: &str) -> String {
    let Some(pointer) = reference.strip_prefix("#/") else {
        return "unknown".to_string();
    };

    let mut segments = pointer
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"));
    let Some(root) = segments.next() else {
        return "unknown".to_string();
    };

    segments.fold(root, |acc, segment| format!("{}[{}]", acc, quote(&segment)))
}

fn operation_id(method: &str, path: &str, operation: &Value) -> String {
    if let Some(id) = operation.get("operationId").and_then(Value::as_str) {
        return id.to_string();
    }

    let segments: Vec<String> = path
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!("{}_{}", method, segments.join("_"))
}

fn is_required(value: &Value) -> bool {
    value.get("required") == Some(&Value::Bool(true))
}

fn description(value: &Value) -> Option<String> {
    let text = value
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())?;
    Some(format!("/** {} */", sanitize_comment(text)))
}

fn sanitize_comment(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => value.to_string(),
        _ => "unknown".to_string(),
    }
}

fn union(parts: Vec<String>) -> String {
    let mut unique: Vec<String> = Vec::new();
    for part in parts {
        if !unique.contains(&part) {
            unique.push(part);
        }
    }

    match unique.len() {
        0 => "never".to_string(),
        _ => unique.join(" | "),
    }
}

fn intersection(parts: Vec<String>) -> String {
    let parts: Vec<String> = parts
        .into_iter()
        .map(|p| if has_top_level_operator(&p) { format!("({})", p) } else { p })
        .collect();

    match parts.len() {
        0 => "unknown".to_string(),
        _ => parts.join(" & "),
    }
}

/// Whether `ty` is a union or intersection outside any brackets or string literals.
fn has_top_level_operator(ty: &str) -> bool {
    let mut nesting = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    for c in ty.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '(' | '[' | '<' => nesting += 1,
            '}' | ')' | ']' | '>' => nesting -= 1,
            '|' | '&' if nesting == 0 => return true,
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ts(schema: Value) -> String {
        let document = json!({ "openapi": "3.1.0", "paths": {} });
        let generator = TypeScriptGenerator::new(&document).unwrap();
        generator.ts_type(&schema, 0)
    }

    #[test]
    fn test_rejects_non_openapi_documents() {
        assert!(matches!(
            TypeScriptGenerator::new(&json!([1, 2])),
            Err(TypegenError::InvalidDocument(_))
        ));
        assert!(matches!(
            TypeScriptGenerator::new(&json!({ "paths": {} })),
            Err(TypegenError::InvalidDocument(_))
        ));
        assert!(matches!(
            TypeScriptGenerator::new(&json!({ "swagger": "2.0", "openapi": "2.0" })),
            Err(TypegenError::InvalidDocument(_))
        ));
        assert!(matches!(
            TypeScriptGenerator::new(&json!({ "openapi": "3.0.3", "paths": [] })),
            Err(TypegenError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_primitives() {
        assert_eq!(ts(json!({ "type": "string" })), "string");
        assert_eq!(ts(json!({ "type": "integer", "format": "int64" })), "number");
        assert_eq!(ts(json!({ "type": "number" })), "number");
        assert_eq!(ts(json!({ "type": "boolean" })), "boolean");
        assert_eq!(ts(json!({})), "unknown");
    }

    #[test]
    fn test_nullable_forms() {
        assert_eq!(ts(json!({ "type": ["number", "null"] })), "number | null");
        assert_eq!(ts(json!({ "type": "string", "nullable": true })), "string | null");
        assert_eq!(
            ts(json!({
                "oneOf": [{ "type": "null" }, { "$ref": "#/components/schemas/Language" }]
            })),
            "null | components[\"schemas\"][\"Language\"]"
        );
    }

    #[test]
    fn test_enums_and_const() {
        assert_eq!(
            ts(json!({ "type": "string", "enum": ["pending", "done"] })),
            "\"pending\" | \"done\""
        );
        assert_eq!(ts(json!({ "const": 3 })), "3");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            ts(json!({ "type": "array", "items": { "$ref": "#/components/schemas/Language" } })),
            "components[\"schemas\"][\"Language\"][]"
        );
        assert_eq!(
            ts(json!({ "type": "array", "items": { "type": ["string", "null"] } })),
            "(string | null)[]"
        );
        assert_eq!(ts(json!({ "type": "array" })), "unknown[]");
    }

    #[test]
    fn test_objects() {
        let ty = ts(json!({
            "type": "object",
            "required": ["code"],
            "properties": {
                "code": { "type": "string", "description": "ISO code" },
                "native-name": { "type": "string" }
            }
        }));
        assert_eq!(
            ty,
            "{\n    /** ISO code */\n    code: string;\n    \"native-name\"?: string;\n}"
        );

        assert_eq!(
            ts(json!({ "type": "object", "additionalProperties": { "type": "integer" } })),
            "{\n    [key: string]: number;\n}"
        );
        assert_eq!(ts(json!({ "type": "object" })), "{ [key: string]: unknown }");
        assert_eq!(
            ts(json!({ "type": "object", "additionalProperties": false })),
            "Record<string, never>"
        );
    }

    #[test]
    fn test_all_of_intersection() {
        assert_eq!(
            ts(json!({ "allOf": [
                { "$ref": "#/components/schemas/Base" },
                { "type": ["string", "null"] }
            ] })),
            "components[\"schemas\"][\"Base\"] & (string | null)"
        );
    }

    #[test]
    fn test_ref_escaping() {
        assert_eq!(
            ref_type("#/components/schemas/a~1b"),
            "components[\"schemas\"][\"a/b\"]"
        );
        assert_eq!(ref_type("other.json#/Foo"), "unknown");
    }

    #[test]
    fn test_property_keys() {
        assert_eq!(property_key("sourceLanguage"), "sourceLanguage");
        assert_eq!(property_key("200"), "200");
        assert_eq!(property_key("2XX"), "\"2XX\"");
        assert_eq!(property_key("content-type"), "\"content-type\"");
    }

    #[test]
    fn test_operation_id_fallback() {
        assert_eq!(operation_id("get", "/items/{id}", &json!({})), "get_items_id");
        assert_eq!(
            operation_id("post", "/x", &json!({ "operationId": "createX" })),
            "createX"
        );
    }

    #[test]
    fn test_parameters_are_grouped_by_location() {
        let document = json!({
            "openapi": "3.0.3",
            "paths": {
                "/items/{id}": {
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer" }
                        }
                    ],
                    "get": {
                        "operationId": "getItem",
                        "parameters": [
                            { "$ref": "#/components/parameters/Verbose" }
                        ],
                        "responses": { "204": { "description": "No content" } }
                    }
                }
            },
            "components": {
                "parameters": {
                    "Verbose": { "name": "verbose", "in": "query", "schema": { "type": "boolean" } }
                }
            }
        });

        let output = generate(&document).unwrap();
        assert!(output.contains("\"/items/{id}\": {\n        get: operations[\"getItem\"];"));
        assert!(output.contains("query?: {\n                verbose?: boolean;\n            };"));
        assert!(output.contains("path: {\n                id: number;\n            };"));
        assert!(output.contains("header?: never;"));
        assert!(output.contains("requestBody?: never;"));
        assert!(output.contains("/** No content */\n            204: {"));
        assert!(output.contains("content?: never;"));
        assert!(output.contains("Verbose: boolean;"));
    }

    #[test]
    fn test_empty_document() {
        let output = generate(&json!({ "openapi": "3.1.0" })).unwrap();
        assert!(output.contains("export interface paths {\n}"));
        assert!(output.contains("schemas: never;"));
        assert!(output.contains("export interface operations {\n}"));
    }
}
