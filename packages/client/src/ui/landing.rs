//! Landing page: title and the three-way menu.

pub fn render() -> String {
    [
        "== House Party ==",
        "  [join]   Join a Room",
        "  [info]   Info",
        "  [create] Create a Room",
        "",
    ]
    .join("\n")
}
