// file: src/repository/remote.rs
// description: git remote url parsing into forge host and identifier
// reference: https://git-scm.com/docs/git-clone#_git_urls

/// Host and `owner/name` path of a git remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRemote {
    pub host: String,
    pub identifier: String,
}

/// Parse HTTPS, SSH, git and scp-like remote URLs.
///
/// Returns `None` when no host or no repository path can be found.
pub fn parse_remote_url(url: &str) -> Option<ParsedRemote> {
    let url = url.trim();

    if let Some((scheme, rest)) = url.split_once("://") {
        return match scheme.to_ascii_lowercase().as_str() {
            "https" | "http" | "ssh" | "git" => {
                let (authority, path) = rest.split_once('/')?;
                parse_segments(authority, path)
            }
            _ => None,
        };
    }

    // scp-like form: [user@]host:path
    let (authority, path) = url.split_once(':')?;
    if authority.contains('/') {
        return None;
    }
    parse_segments(authority, path)
}

fn parse_segments(authority: &str, path: &str) -> Option<ParsedRemote> {
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = host.split_once(':').map_or(host, |(host, _port)| host);
    if host.is_empty() {
        return None;
    }

    let path = path.trim_matches('/');
    let identifier = path.strip_suffix(".git").unwrap_or(path).trim_end_matches('/');
    if identifier.is_empty() {
        return None;
    }

    Some(ParsedRemote {
        host: host.to_ascii_lowercase(),
        identifier: identifier.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(host: &str, identifier: &str) -> Option<ParsedRemote> {
        Some(ParsedRemote {
            host: host.to_string(),
            identifier: identifier.to_string(),
        })
    }

    #[test]
    fn test_https_urls() {
        assert_eq!(
            parse_remote_url("https://github.com/acme/widgets.git"),
            parsed("github.com", "acme/widgets")
        );
        assert_eq!(
            parse_remote_url("https://github.com/acme/widgets"),
            parsed("github.com", "acme/widgets")
        );
        assert_eq!(
            parse_remote_url("http://github.com/acme/widgets/"),
            parsed("github.com", "acme/widgets")
        );
    }

    #[test]
    fn test_https_with_credentials_and_port() {
        assert_eq!(
            parse_remote_url("https://token@GitHub.com:443/acme/widgets.git"),
            parsed("github.com", "acme/widgets")
        );
    }

    #[test]
    fn test_ssh_urls() {
        assert_eq!(
            parse_remote_url("git@github.com:acme/widgets.git"),
            parsed("github.com", "acme/widgets")
        );
        assert_eq!(
            parse_remote_url("ssh://git@github.com/acme/widgets.git"),
            parsed("github.com", "acme/widgets")
        );
        assert_eq!(
            parse_remote_url("ssh://git@github.com:22/acme/widgets"),
            parsed("github.com", "acme/widgets")
        );
    }

    #[test]
    fn test_self_hosted_keeps_full_path() {
        assert_eq!(
            parse_remote_url("https://gitlab.example.com/group/sub/project.git"),
            parsed("gitlab.example.com", "group/sub/project")
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(parse_remote_url("not-a-url"), None);
        assert_eq!(parse_remote_url("https://github.com"), None);
        assert_eq!(parse_remote_url("https://github.com/"), None);
        assert_eq!(parse_remote_url("ftp://github.com/acme/widgets"), None);
        assert_eq!(parse_remote_url("./relative/path:with-colon"), None);
        assert_eq!(parse_remote_url(""), None);
    }
}
