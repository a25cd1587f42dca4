//! The embedded landing page.

/// Static submission form: a URL textarea, a multi-file input, and the
/// target width box. Field names match what `/resize_batch` expects.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Shrinkray</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
    textarea, input { font: inherit; }
    label { font-weight: 600; }
  </style>
</head>
<body>
  <h1>Shrinkray</h1>
  <p>Paste image URLs, upload files, or both. Each image is resized to the
  target width (aspect ratio preserved). One image comes back directly;
  several come back as a zip archive.</p>
  <form action="/resize_batch" method="post" enctype="multipart/form-data">
    <p>
      <label for="image_urls">Image URLs (one per line)</label><br>
      <textarea id="image_urls" name="image_urls" rows="6" cols="60"
                placeholder="https://example.com/photo.jpg"></textarea>
    </p>
    <p>
      <label for="files">Upload files</label><br>
      <input id="files" name="files" type="file" accept="image/*" multiple>
    </p>
    <p>
      <label for="new_width">Target width (px)</label><br>
      <input id="new_width" name="new_width" type="number" value="300" min="1">
    </p>
    <p><button type="submit">Resize</button></p>
  </form>
</body>
</html>
"#;
