//! HTML page wrapped around rendered markup.

use crate::render::escape_js;

const MUTATE_URL: &str = "${MUTATE_URL}";

const HEADER: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Struct Editor</title>
    <script>
      function sendCommand(operator, path, extraArgs) {
        let urlParams = "?operator=" + encodeURIComponent(operator) +
            "&path=" + encodeURIComponent(path);
        if (extraArgs) {
          urlParams += extraArgs;
        }
        fetch('${MUTATE_URL}' + urlParams, { method: "POST" })
          .then(function (response) {
            if (response.ok) {
              location.reload();
            } else {
              response.text().then(function (text) { alert(text); });
            }
          })
          .catch(function (err) { alert(err); });
      }

      function update(path, inputId) {
        let newValue = document.getElementById(inputId).value;
        sendCommand("set", path, "&value=" + encodeURIComponent(newValue));
      }

      function grow(path) {
        sendCommand("grow", path);
      }

      function shrink(path) {
        sendCommand("shrink", path);
      }
    </script>
  </head>
  <body>
"#;

const FOOTER: &str = r#"
  </body>
</html>
"#;

/// Wrap `content` in a full page whose script posts mutations to
/// `mutate_url`.
pub fn wrap_content(content: &str, mutate_url: &str) -> String {
    let url = escape_js(mutate_url).replace("</", "<\\/");
    let header = HEADER.replace(MUTATE_URL, &url);
    let mut page = String::with_capacity(header.len() + content.len() + FOOTER.len());
    page.push_str(&header);
    page.push_str(content);
    page.push_str(FOOTER);
    page
}
