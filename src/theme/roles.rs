//! Well-known role identifiers used by bundled themes and editor translations.
//!
//! The role vocabulary is open: themes may declare roles not listed here and
//! they are carried through untouched.

pub const FOREGROUND: &str = "foreground";
pub const BACKGROUND: &str = "background";
pub const SELECTION_FOREGROUND: &str = "selectionForeground";
pub const SELECTION_BACKGROUND: &str = "selectionBackground";
pub const CURRENT_LINE: &str = "currentLine";
pub const LINE_NUMBER: &str = "lineNumber";
pub const SINGLE_LINE_COMMENT: &str = "singleLineComment";
pub const MULTI_LINE_COMMENT: &str = "multiLineComment";
pub const COMMENT_TASK_TAG: &str = "commentTaskTag";
pub const JAVADOC: &str = "javadoc";
pub const JAVADOC_LINK: &str = "javadocLink";
pub const JAVADOC_TAG: &str = "javadocTag";
pub const JAVADOC_KEYWORD: &str = "javadocKeyword";
pub const CLASS: &str = "class";
pub const INTERFACE: &str = "interface";
pub const METHOD: &str = "method";
pub const METHOD_DECLARATION: &str = "methodDeclaration";
pub const BRACKET: &str = "bracket";
pub const NUMBER: &str = "number";
pub const STRING: &str = "string";
pub const OPERATOR: &str = "operator";
pub const KEYWORD: &str = "keyword";
pub const ANNOTATION: &str = "annotation";
pub const STATIC_METHOD: &str = "staticMethod";
pub const LOCAL_VARIABLE: &str = "localVariable";
pub const LOCAL_VARIABLE_DECLARATION: &str = "localVariableDeclaration";
pub const FIELD: &str = "field";
pub const STATIC_FIELD: &str = "staticField";
pub const STATIC_FINAL_FIELD: &str = "staticFinalField";
pub const DEPRECATED_MEMBER: &str = "deprecatedMember";
pub const ENUM: &str = "enum";
pub const PARAMETER_VARIABLE: &str = "parameterVariable";
pub const TYPE_ARGUMENT: &str = "typeArgument";
pub const CONSTANT: &str = "constant";
pub const OCCURRENCE_INDICATION: &str = "occurrenceIndication";
pub const WRITE_OCCURRENCE_INDICATION: &str = "writeOccurrenceIndication";
pub const FIND_SCOPE: &str = "findScope";
pub const SEARCH_RESULT_INDICATION: &str = "searchResultIndication";
