//! Typed SDL builders.
//!
//! Every builder renders itself through [`fmt::Display`]; [`SchemaBuilder`]
//! joins the rendered definitions with blank lines.

use std::fmt;

const INDENT: &str = "  ";

fn write_description(
    f: &mut fmt::Formatter<'_>,
    indent: &str,
    description: Option<&str>,
) -> fmt::Result {
    match description {
        Some(text) => writeln!(f, "{indent}\"\"\"{text}\"\"\""),
        None => Ok(()),
    }
}

fn write_directives(f: &mut fmt::Formatter<'_>, directives: &[String]) -> fmt::Result {
    for directive in directives {
        write!(f, " {directive}")?;
    }
    Ok(())
}

/// Builder for a whole schema document
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    definitions: Vec<String>,
}

impl SchemaBuilder {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// A described `Query` and `PageInfo` that pass every rule.
    ///
    /// Renders exactly [`crate::fixtures::CLEAN_BASELINE`].
    pub fn clean_baseline() -> Self {
        Self::new()
            .with_object(
                ObjectBuilder::new("PageInfo")
                    .description("Relay pagination details")
                    .field(
                        FieldBuilder::new("hasNextPage", "Boolean")
                            .description("Whether another page follows"),
                    ),
            )
            .with_object(
                ObjectBuilder::new("Query")
                    .description("The root query")
                    .field(FieldBuilder::new("page", "PageInfo").description("The current page")),
            )
    }

    /// Add an object type, interface or object extension.
    pub fn with_object(self, object: ObjectBuilder) -> Self {
        self.with_definition(object)
    }

    pub fn with_enum(self, enum_type: EnumBuilder) -> Self {
        self.with_definition(enum_type)
    }

    pub fn with_input(self, input: InputBuilder) -> Self {
        self.with_definition(input)
    }

    pub fn with_union(self, union_type: UnionBuilder) -> Self {
        self.with_definition(union_type)
    }

    /// Add a scalar, with an optional description.
    pub fn with_scalar(mut self, name: &str, description: Option<&str>) -> Self {
        self.definitions.push(match description {
            Some(text) => format!("\"\"\"{text}\"\"\"\nscalar {name}"),
            None => format!("scalar {name}"),
        });
        self
    }

    /// Add SDL text as-is.
    pub fn with_raw(mut self, sdl: &str) -> Self {
        self.definitions.push(sdl.trim().to_string());
        self
    }

    fn with_definition(mut self, definition: impl fmt::Display) -> Self {
        self.definitions.push(definition.to_string());
        self
    }

    /// Render the schema: definitions separated by blank lines, with a trailing newline.
    pub fn build(&self) -> String {
        let mut sdl = self.definitions.join("\n\n");
        sdl.push('\n');
        sdl
    }
}

/// Builder for `type`, `interface` and `extend type` definitions
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    keyword: &'static str,
    name: String,
    description: Option<String>,
    directives: Vec<String>,
    fields: Vec<FieldBuilder>,
}

impl ObjectBuilder {
    /// An object type.
    pub fn new(name: &str) -> Self {
        Self::with_keyword("type", name)
    }

    pub fn interface(name: &str) -> Self {
        Self::with_keyword("interface", name)
    }

    /// An object type extension. Extensions never render a description.
    pub fn extend(name: &str) -> Self {
        Self::with_keyword("extend type", name)
    }

    fn with_keyword(keyword: &'static str, name: &str) -> Self {
        Self {
            keyword,
            name: name.to_string(),
            description: None,
            directives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Apply a directive, written with its `@`, e.g. `@key(fields: "id")`.
    pub fn directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_string());
        self
    }

    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }
}

impl fmt::Display for ObjectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keyword != "extend type" {
            write_description(f, "", self.description.as_deref())?;
        }
        write!(f, "{} {}", self.keyword, self.name)?;
        write_directives(f, &self.directives)?;
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "{field}")?;
        }
        write!(f, "}}")
    }
}

/// Builder for a field definition
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    ty: String,
    description: Option<String>,
    arguments: Vec<InputValueBuilder>,
    directives: Vec<String>,
}

impl FieldBuilder {
    /// A field; `ty` is written verbatim, e.g. `[User!]!`.
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            description: None,
            arguments: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn argument(mut self, argument: InputValueBuilder) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_string());
        self
    }
}

impl fmt::Display for FieldBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, INDENT, self.description.as_deref())?;
        write!(f, "{INDENT}{}", self.name)?;
        if !self.arguments.is_empty() {
            let arguments: Vec<String> = self
                .arguments
                .iter()
                .map(InputValueBuilder::inline)
                .collect();
            write!(f, "({})", arguments.join(", "))?;
        }
        write!(f, ": {}", self.ty)?;
        write_directives(f, &self.directives)
    }
}

/// Builder for an argument or an input object field
#[derive(Debug, Clone)]
pub struct InputValueBuilder {
    name: String,
    ty: String,
    description: Option<String>,
}

impl InputValueBuilder {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            description: None,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Argument form: description and definition on one line
    fn inline(&self) -> String {
        match &self.description {
            Some(text) => format!("\"\"\"{text}\"\"\" {}: {}", self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

impl fmt::Display for InputValueBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, INDENT, self.description.as_deref())?;
        write!(f, "{INDENT}{}: {}", self.name, self.ty)
    }
}

/// Builder for an input object type
#[derive(Debug, Clone)]
pub struct InputBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<InputValueBuilder>,
}

impl InputBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn field(mut self, field: InputValueBuilder) -> Self {
        self.fields.push(field);
        self
    }
}

impl fmt::Display for InputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, "", self.description.as_deref())?;
        writeln!(f, "input {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "{field}")?;
        }
        write!(f, "}}")
    }
}

/// Builder for an enum type
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    name: String,
    description: Option<String>,
    values: Vec<EnumValueBuilder>,
}

impl EnumBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            values: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn value(mut self, value: EnumValueBuilder) -> Self {
        self.values.push(value);
        self
    }
}

impl fmt::Display for EnumBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, "", self.description.as_deref())?;
        writeln!(f, "enum {} {{", self.name)?;
        for value in &self.values {
            writeln!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

/// Builder for one enum value
#[derive(Debug, Clone)]
pub struct EnumValueBuilder {
    name: String,
    description: Option<String>,
    directives: Vec<String>,
}

impl EnumValueBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            directives: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_string());
        self
    }
}

impl fmt::Display for EnumValueBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, INDENT, self.description.as_deref())?;
        write!(f, "{INDENT}{}", self.name)?;
        write_directives(f, &self.directives)
    }
}

/// Builder for a union type
#[derive(Debug, Clone)]
pub struct UnionBuilder {
    name: String,
    description: Option<String>,
    members: Vec<String>,
}

impl UnionBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            members: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn member(mut self, member: &str) -> Self {
        self.members.push(member.to_string());
        self
    }
}

impl fmt::Display for UnionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, "", self.description.as_deref())?;
        write!(f, "union {} = {}", self.name, self.members.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CLEAN_BASELINE;

    #[test]
    fn test_clean_baseline_matches_fixture() {
        assert_eq!(SchemaBuilder::clean_baseline().build(), CLEAN_BASELINE);
    }

    #[test]
    fn test_field_with_arguments_and_directives() {
        let field = FieldBuilder::new("users", "UserConnection")
            .argument(InputValueBuilder::new("first", "Int").description("Page size"))
            .argument(InputValueBuilder::new("after", "String"))
            .directive("@deprecated(reason: \"Use people\")");

        assert_eq!(
            field.to_string(),
            "  users(\"\"\"Page size\"\"\" first: Int, after: String): UserConnection @deprecated(reason: \"Use people\")"
        );
    }

    #[test]
    fn test_extension_has_no_description() {
        let sdl = ObjectBuilder::extend("Query")
            .description("ignored")
            .field(FieldBuilder::new("me", "User"))
            .to_string();

        assert_eq!(sdl, "extend type Query {\n  me: User\n}");
    }

    #[test]
    fn test_enum_union_input_and_scalar() {
        let sdl = SchemaBuilder::new()
            .with_enum(
                EnumBuilder::new("Status")
                    .value(EnumValueBuilder::new("ACTIVE"))
                    .value(EnumValueBuilder::new("GONE").directive("@deprecated")),
            )
            .with_union(UnionBuilder::new("Result").member("Book").member("Film"))
            .with_input(
                InputBuilder::new("Filter")
                    .description("Search filter")
                    .field(InputValueBuilder::new("name", "String").description("Name")),
            )
            .with_scalar("Date", None)
            .build();

        assert_eq!(
            sdl,
            "enum Status {\n  ACTIVE\n  GONE @deprecated\n}\n\nunion Result = Book | Film\n\n\"\"\"Search filter\"\"\"\ninput Filter {\n  \"\"\"Name\"\"\"\n  name: String\n}\n\nscalar Date\n"
        );
    }
}
