use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `rest_api_domain` - The REST API base URL to validate
/// * `graphql_api_domain` - The GraphQL API base URL to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - Neither API domain may be empty
/// - Each API domain must be a valid URL or domain name
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    rest_api_domain: &str,
    graphql_api_domain: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_domain("REST API domain", rest_api_domain)?;
    validate_domain("GraphQL API domain", graphql_api_domain)?;

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_domain(label: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    // Check if the domain looks like a valid URL or domain
    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !domain.contains('.') && !domain.starts_with("localhost") {
            return Err(AppError::config_error(format!(
                "{label} must be a valid URL or domain name"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains_pass() {
        assert!(validate_config("https://api.example.com", "https://gql.example.com", &None).is_ok());
        assert!(validate_config("http://localhost:8080", "localhost:9090", &None).is_ok());
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(validate_config("", "https://gql.example.com", &None).is_err());
        assert!(validate_config("https://api.example.com", "", &None).is_err());
    }

    #[test]
    fn test_garbage_domain_rejected() {
        let result = validate_config("not a domain", "https://gql.example.com", &None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config(
            "https://api.example.com",
            "https://gql.example.com",
            &Some(String::new()),
        );
        assert!(result.is_err());
    }
}
