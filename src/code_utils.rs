use egui_code_editor::Syntax;

pub fn c_syntax() -> Syntax {
    Syntax::new("c")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "int", "char", "void", "if", "else", "for", "while", "return", "break", "continue",
            "switch", "case", "default", "struct", "typedef", "enum", "union", "sizeof", "do",
            "goto", "static", "const", "volatile", "unsigned", "signed", "short", "long", "float",
            "double", "auto", "extern", "register",
        ])
        .with_types([
            "int", "char", "float", "double", "void", "size_t", "uint8_t", "uint16_t", "uint32_t",
            "uint64_t",
        ])
}

pub fn html_syntax() -> Syntax {
    Syntax::new("html")
        .with_comment_multiline(["<!--", "-->"])
        .with_keywords([
            "html", "head", "body", "title", "h1", "h2", "h3", "p", "a", "img", "br", "hr", "b",
            "i", "u", "sub", "sup", "font", "table", "tr", "td", "th", "ol", "ul", "li", "div",
            "span", "form", "input",
        ])
        .with_types([
            "href", "src", "border", "colspan", "rowspan", "bgcolor", "color", "align", "width",
            "height",
        ])
}
