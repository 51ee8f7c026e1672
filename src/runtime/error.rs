use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed parsing {}{}", context, Error::format_msg_as_detail(msg))]
    ParseError {
        context: String,
        msg: Option<String>,
    },

    #[error("Invalid argument '{}'{}", name, Error::format_msg_as_detail(msg))]
    InvalidArgument {
        name: String,
        msg: Option<String>,
    },
}

impl Error {
    #[cold]
    pub fn parse_error<C: Into<String>, M: Into<String>>(context: C, msg: Option<M>) -> Self {
        Error::ParseError {
            context: context.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn invalid_argument<N: Into<String>, M: Into<String>>(name: N, msg: Option<M>) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::parse_error("token 'foo'", Some("expected an integer, pop, peek or len"));
        assert_eq!(
            e.to_string(),
            "Failed parsing token 'foo' (expected an integer, pop, peek or len)"
        );

        let e = Error::invalid_argument("--random", None::<String>);
        assert_eq!(e.to_string(), "Invalid argument '--random'");
    }
}
