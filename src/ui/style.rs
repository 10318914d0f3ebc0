pub const TOAST_CSS: &str = "
@keyframes toast-fade {
    0% { opacity: 0; }
    8% { opacity: 1; }
    80% { opacity: 1; }
    100% { opacity: 0; visibility: hidden; }
}
";

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; \
     font-family: sans-serif; padding: 8px; box-sizing: border-box;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ccc;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f3f3f3; \
     border: 1px solid #bbb; padding: 4px 8px; text-align: left; white-space: nowrap;"
}

pub fn table_cell_style(align: &str) -> String {
    format!("border: 1px solid #ddd; padding: 4px 8px; text-align: {align}; white-space: nowrap;")
}

pub fn toast_style() -> &'static str {
    "position: fixed; left: 50%; bottom: 32px; transform: translateX(-50%); \
     background: rgba(40, 40, 40, 0.9); color: #fff; padding: 8px 16px; border-radius: 4px; \
     pointer-events: none; animation: toast-fade 3s ease-in-out forwards;"
}

pub fn footer_style() -> &'static str {
    "padding-top: 6px; color: #777; font-size: 12px;"
}
