use super::{EditorKind, MarkupType};
use crate::theme::roles::*;

/// How one destination spells theme roles in its own preference keys.
#[derive(Debug)]
pub struct Translation {
    /// `(role, preference key)`; a role may feed several keys.
    pub colors: &'static [(&'static str, &'static str)],
    /// `(preference key, value)` written whenever a theme is mapped.
    pub flags: &'static [(&'static str, &'static str)],
}

impl Translation {
    /// Every key this destination owns.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colors
            .iter()
            .map(|&(_, key)| key)
            .chain(self.flags.iter().map(|&(key, _)| key))
    }
}

pub(crate) fn translation_for(kind: EditorKind) -> &'static Translation {
    match kind {
        EditorKind::Text => &TEXT,
        EditorKind::Java => &JAVA,
        EditorKind::JavaProperties => &JAVA_PROPERTIES,
        EditorKind::Markup(MarkupType::Xml) => &XML,
        EditorKind::Markup(MarkupType::Html) => &HTML,
        EditorKind::Markup(MarkupType::Css) => &CSS,
        EditorKind::JavaScript => &JAVASCRIPT,
        EditorKind::Cpp => &CPP,
        EditorKind::Php => &PHP,
        EditorKind::Ant => &ANT,
        EditorKind::Sql => &SQL,
    }
}

static TEXT: Translation = Translation {
    colors: &[
        (FOREGROUND, "AbstractTextEditor.Color.Foreground"),
        (BACKGROUND, "AbstractTextEditor.Color.Background"),
        (SELECTION_FOREGROUND, "AbstractTextEditor.Color.SelectionForeground"),
        (SELECTION_BACKGROUND, "AbstractTextEditor.Color.SelectionBackground"),
        (CURRENT_LINE, "currentLineColor"),
        (LINE_NUMBER, "lineNumberColor"),
        (OCCURRENCE_INDICATION, "occurrenceIndicationColor"),
        (WRITE_OCCURRENCE_INDICATION, "writeOccurrenceIndicationColor"),
        (FIND_SCOPE, "AbstractTextEditor.Color.FindScope"),
        (SEARCH_RESULT_INDICATION, "searchResultIndicationColor"),
    ],
    flags: &[
        ("AbstractTextEditor.Color.Foreground.SystemDefault", "false"),
        ("AbstractTextEditor.Color.Background.SystemDefault", "false"),
        ("AbstractTextEditor.Color.SelectionForeground.SystemDefault", "false"),
        ("AbstractTextEditor.Color.SelectionBackground.SystemDefault", "false"),
    ],
};

static JAVA: Translation = Translation {
    colors: &[
        (FOREGROUND, "java_default"),
        (SINGLE_LINE_COMMENT, "java_single_line_comment"),
        (MULTI_LINE_COMMENT, "java_multi_line_comment"),
        (COMMENT_TASK_TAG, "java_comment_task_tag"),
        (JAVADOC, "java_doc_default"),
        (JAVADOC_LINK, "java_doc_link"),
        (JAVADOC_TAG, "java_doc_tag"),
        (JAVADOC_KEYWORD, "java_doc_keyword"),
        (KEYWORD, "java_keyword"),
        (KEYWORD, "java_keyword_return"),
        (STRING, "java_string"),
        (OPERATOR, "java_operator"),
        (BRACKET, "java_bracket"),
        (NUMBER, "semanticHighlighting.number.color"),
        (CLASS, "semanticHighlighting.class.color"),
        (INTERFACE, "semanticHighlighting.interface.color"),
        (ENUM, "semanticHighlighting.enum.color"),
        (METHOD, "semanticHighlighting.method.color"),
        (METHOD_DECLARATION, "semanticHighlighting.methodDeclarationName.color"),
        (STATIC_METHOD, "semanticHighlighting.staticMethodInvocation.color"),
        (FIELD, "semanticHighlighting.field.color"),
        (STATIC_FIELD, "semanticHighlighting.staticField.color"),
        (STATIC_FINAL_FIELD, "semanticHighlighting.staticFinalField.color"),
        (LOCAL_VARIABLE, "semanticHighlighting.localVariable.color"),
        (
            LOCAL_VARIABLE_DECLARATION,
            "semanticHighlighting.localVariableDeclaration.color",
        ),
        (PARAMETER_VARIABLE, "semanticHighlighting.parameterVariable.color"),
        (TYPE_ARGUMENT, "semanticHighlighting.typeArgument.color"),
        (ANNOTATION, "semanticHighlighting.annotation.color"),
        (DEPRECATED_MEMBER, "semanticHighlighting.deprecatedMember.color"),
    ],
    flags: &[
        ("semanticHighlighting.number.enabled", "true"),
        ("semanticHighlighting.class.enabled", "true"),
        ("semanticHighlighting.interface.enabled", "true"),
        ("semanticHighlighting.enum.enabled", "true"),
        ("semanticHighlighting.method.enabled", "true"),
        ("semanticHighlighting.methodDeclarationName.enabled", "true"),
        ("semanticHighlighting.staticMethodInvocation.enabled", "true"),
        ("semanticHighlighting.field.enabled", "true"),
        ("semanticHighlighting.staticField.enabled", "true"),
        ("semanticHighlighting.staticFinalField.enabled", "true"),
        ("semanticHighlighting.localVariable.enabled", "true"),
        ("semanticHighlighting.localVariableDeclaration.enabled", "true"),
        ("semanticHighlighting.parameterVariable.enabled", "true"),
        ("semanticHighlighting.typeArgument.enabled", "true"),
        ("semanticHighlighting.annotation.enabled", "true"),
    ],
};

static JAVA_PROPERTIES: Translation = Translation {
    colors: &[
        (KEYWORD, "pf_coloring_key"),
        (STRING, "pf_coloring_value"),
        (OPERATOR, "pf_coloring_assignment"),
        (SINGLE_LINE_COMMENT, "pf_coloring_comment"),
        (NUMBER, "pf_coloring_argument"),
    ],
    flags: &[],
};

static XML: Translation = Translation {
    colors: &[
        (FOREGROUND, "xmlContent"),
        (KEYWORD, "tagName"),
        (FIELD, "tagAttributeName"),
        (STRING, "tagAttributeValue"),
        (BRACKET, "tagBorder"),
        (MULTI_LINE_COMMENT, "commentBorder"),
        (MULTI_LINE_COMMENT, "commentText"),
        (ANNOTATION, "declBorder"),
        (CONSTANT, "entityReference"),
        (STRING, "cdataText"),
    ],
    flags: &[],
};

static HTML: Translation = Translation {
    colors: &[
        (FOREGROUND, "xmlContent"),
        (KEYWORD, "tagName"),
        (FIELD, "tagAttributeName"),
        (STRING, "tagAttributeValue"),
        (BRACKET, "tagBorder"),
        (MULTI_LINE_COMMENT, "commentBorder"),
        (MULTI_LINE_COMMENT, "commentText"),
        (ANNOTATION, "declBorder"),
        (CONSTANT, "entityReference"),
        (OPERATOR, "SCRIPT_AREA_BORDER"),
    ],
    flags: &[],
};

static CSS: Translation = Translation {
    colors: &[
        (FOREGROUND, "NORMAL"),
        (CLASS, "SELECTOR"),
        (FIELD, "PROPERTY_NAME"),
        (STRING, "PROPERTY_VALUE"),
        (STRING, "STRING"),
        (STRING, "URI"),
        (MULTI_LINE_COMMENT, "COMMENT"),
        (ANNOTATION, "MEDIA"),
        (KEYWORD, "ATMARK_RULE"),
        (OPERATOR, "UNIVERSAL"),
        (OPERATOR, "COLON"),
        (OPERATOR, "SEMI_COLON"),
        (BRACKET, "CURLY_BRACE"),
    ],
    flags: &[],
};

static JAVASCRIPT: Translation = Translation {
    colors: &[
        (FOREGROUND, "javaScript_default"),
        (SINGLE_LINE_COMMENT, "javaScript_single_line_comment"),
        (MULTI_LINE_COMMENT, "javaScript_multi_line_comment"),
        (COMMENT_TASK_TAG, "javaScript_comment_task_tag"),
        (JAVADOC, "javaScript_doc_default"),
        (JAVADOC_TAG, "javaScript_doc_tag"),
        (JAVADOC_KEYWORD, "javaScript_doc_keyword"),
        (KEYWORD, "javaScript_keyword"),
        (STRING, "javaScript_string"),
        (OPERATOR, "javaScript_operator"),
        (BRACKET, "javaScript_bracket"),
        (NUMBER, "semanticHighlighting.number.color"),
        (FIELD, "semanticHighlighting.field.color"),
        (METHOD, "semanticHighlighting.methodDeclarationName.color"),
        (LOCAL_VARIABLE, "semanticHighlighting.localVariable.color"),
    ],
    flags: &[
        ("semanticHighlighting.number.enabled", "true"),
        ("semanticHighlighting.field.enabled", "true"),
        ("semanticHighlighting.methodDeclarationName.enabled", "true"),
        ("semanticHighlighting.localVariable.enabled", "true"),
    ],
};

static CPP: Translation = Translation {
    colors: &[
        (FOREGROUND, "c_default"),
        (SINGLE_LINE_COMMENT, "c_single_line_comment"),
        (MULTI_LINE_COMMENT, "c_multi_line_comment"),
        (COMMENT_TASK_TAG, "c_comment_task_tag"),
        (KEYWORD, "c_keyword"),
        (CLASS, "c_type"),
        (STRING, "c_string"),
        (OPERATOR, "c_operators"),
        (BRACKET, "c_braces"),
        (NUMBER, "c_numbers"),
        (ANNOTATION, "pp_directive"),
        (FIELD, "semanticHighlighting.field.color"),
        (STATIC_FIELD, "semanticHighlighting.staticField.color"),
        (METHOD, "semanticHighlighting.method.color"),
        (METHOD_DECLARATION, "semanticHighlighting.functionDeclaration.color"),
        (LOCAL_VARIABLE, "semanticHighlighting.localVariable.color"),
        (PARAMETER_VARIABLE, "semanticHighlighting.parameterVariable.color"),
        (CONSTANT, "semanticHighlighting.enumerator.color"),
        (ENUM, "semanticHighlighting.enum.color"),
    ],
    flags: &[
        ("semanticHighlighting.field.enabled", "true"),
        ("semanticHighlighting.staticField.enabled", "true"),
        ("semanticHighlighting.method.enabled", "true"),
        ("semanticHighlighting.functionDeclaration.enabled", "true"),
        ("semanticHighlighting.localVariable.enabled", "true"),
        ("semanticHighlighting.parameterVariable.enabled", "true"),
        ("semanticHighlighting.enumerator.enabled", "true"),
        ("semanticHighlighting.enum.enabled", "true"),
    ],
};

static PHP: Translation = Translation {
    colors: &[
        (FOREGROUND, "normal"),
        (KEYWORD, "keyword"),
        (STRING, "string"),
        (NUMBER, "number"),
        (LOCAL_VARIABLE, "variable"),
        (SINGLE_LINE_COMMENT, "comment"),
        (MULTI_LINE_COMMENT, "multiLineComment"),
        (COMMENT_TASK_TAG, "taskTag"),
        (JAVADOC, "phpDoc"),
        (JAVADOC_TAG, "phpDocTag"),
        (OPERATOR, "operator"),
        (BRACKET, "bracket"),
        (CONSTANT, "constant"),
        (FIELD, "field"),
        (METHOD, "function"),
    ],
    flags: &[],
};

static ANT: Translation = Translation {
    colors: &[
        (FOREGROUND, "ant.text"),
        (KEYWORD, "ant.tag"),
        (STRING, "ant.constantStrings"),
        (MULTI_LINE_COMMENT, "ant.xmlComment"),
        (ANNOTATION, "ant.processingInstruction"),
        (CONSTANT, "ant.dtd"),
    ],
    flags: &[],
};

static SQL: Translation = Translation {
    colors: &[
        (FOREGROUND, "sql.identifier"),
        (KEYWORD, "sql.keyword"),
        (STRING, "sql.string"),
        (STRING, "sql.quotedLiteral"),
        (SINGLE_LINE_COMMENT, "sql.comment"),
        (FIELD, "sql.delimitedIdentifier"),
        (CLASS, "sql.type"),
        (NUMBER, "sql.number"),
    ],
    flags: &[],
};
