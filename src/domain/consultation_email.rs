use htmlescape::encode_minimal;

use crate::domain::ConsultationRequest;

/// The notification sent to the consultancy inbox for one consultation request.
pub struct ConsultationEmail {
    pub subject: String,
    pub html: String,
}

impl ConsultationEmail {
    pub fn compose(request: &ConsultationRequest) -> Self {
        let subject = format!("New Consultation Request from {}", request.name);

        let name = encode_minimal(request.name.as_ref());
        let email = encode_minimal(request.reply_to.as_ref());
        let company_section = match &request.company {
            Some(company) => format!(
                r#"
        <div class="field">
          <div class="label">🏢 Company:</div>
          <div class="value">{}</div>
        </div>
"#,
                encode_minimal(company)
            ),
            None => String::new(),
        };
        // Escape first so the inserted line breaks survive as markup.
        let message = encode_minimal(request.message.as_ref()).replace('\n', "<br>");

        let html = format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <style>
      body {{
        font-family: Arial, sans-serif;
        line-height: 1.6;
        color: #333;
      }}
      .container {{
        max-width: 600px;
        margin: 0 auto;
        padding: 20px;
        background-color: #f9f9f9;
        border-radius: 10px;
      }}
      .header {{
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        padding: 20px;
        border-radius: 10px 10px 0 0;
        text-align: center;
      }}
      .content {{
        background: white;
        padding: 30px;
        border-radius: 0 0 10px 10px;
      }}
      .field {{
        margin-bottom: 20px;
      }}
      .label {{
        font-weight: bold;
        color: #667eea;
        margin-bottom: 5px;
      }}
      .value {{
        padding: 10px;
        background-color: #f0f0f0;
        border-radius: 5px;
      }}
      .message-box {{
        background-color: #f8f9fa;
        padding: 15px;
        border-left: 4px solid #667eea;
        margin-top: 10px;
      }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1>🎯 New Consultation Request</h1>
      </div>
      <div class="content">
        <div class="field">
          <div class="label">👤 Name:</div>
          <div class="value">{name}</div>
        </div>

        <div class="field">
          <div class="label">📧 Email:</div>
          <div class="value"><a href="mailto:{email}">{email}</a></div>
        </div>
{company_section}
        <div class="field">
          <div class="label">💬 Message:</div>
          <div class="message-box">{message}</div>
        </div>

        <hr style="margin: 30px 0; border: none; border-top: 1px solid #ddd;">

        <p style="color: #666; font-size: 14px;">
          This email was sent from the AI Integration Labs contact form.
        </p>
      </div>
    </div>
  </body>
</html>"#
        );

        Self { subject, html }
    }
}
