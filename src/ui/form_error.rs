use tera::escape_html;

/// 渲染字段错误区域
///
/// 无错误时不输出任何内容；否则每条信息一行 `<p>`，容器以 `id` 关联到输入框
/// (`aria-describedby`)，并作为 live region 供读屏软件播报。
pub fn render(id: &str, errors: Option<&[String]>) -> String {
    let errors = match errors {
        Some(errors) if !errors.is_empty() => errors,
        _ => return String::new(),
    };

    let mut html = format!(
        r#"<div id="{}" aria-live="polite" aria-atomic="true">"#,
        escape_html(id)
    );
    for error in errors {
        html.push_str(r#"<p class="mt-2 text-sm text-red-500">"#);
        html.push_str(&escape_html(error));
        html.push_str("</p>");
    }
    html.push_str("</div>");
    html
}
