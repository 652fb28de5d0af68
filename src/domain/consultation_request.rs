use crate::domain::RequiredField;
use crate::routes::SendEmailBody;

#[derive(Debug)]
pub struct ConsultationRequest {
    pub name: RequiredField,
    /// The submitter's address, used as the reply-to of the notification.
    /// Presence is checked here, format is not.
    pub reply_to: RequiredField,
    pub company: Option<String>,
    pub message: RequiredField,
}

impl TryFrom<SendEmailBody> for ConsultationRequest {
    type Error = String;

    fn try_from(body: SendEmailBody) -> Result<Self, Self::Error> {
        let name = RequiredField::parse(body.name, "name")?;
        let reply_to = RequiredField::parse(body.email, "email")?;
        let message = RequiredField::parse(body.message, "message")?;
        let company = body.company.filter(|company| !company.is_empty());
        Ok(ConsultationRequest {
            name,
            reply_to,
            company,
            message,
        })
    }
}
