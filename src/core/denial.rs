pub const DENIAL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Stalliongate - Access Denied</title>
  <style>
    body {
      font-family: 'Segoe UI', Arial, sans-serif;
      display: flex;
      justify-content: center;
      align-items: center;
      height: 100vh;
      margin: 0;
      background: #f4f4f8;
    }
    .container {
      background: white;
      padding: 50px;
      border-radius: 20px;
      box-shadow: 0 20px 60px rgba(0,0,0,.15);
      text-align: center;
      max-width: 600px;
    }
    h1 { color: #e74c3c; margin-bottom: 20px; }
    p { color: #555; line-height: 1.8; }
  </style>
</head>
<body>
  <div class="container">
    <h1>Access Denied</h1>
    <p>This access token is invalid or has expired.</p>
    <p><a href="/">Back to the home page</a></p>
  </div>
</body>
</html>
"#;
