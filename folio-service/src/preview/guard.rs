use std::net::{Ipv4Addr, Ipv6Addr};
use url::{Host, Url};

use super::PreviewError;

/// 校验外部URL，拒绝非http(s)协议和指向内部网络的主机
///
/// 只检查字面量主机名和IP，不做DNS解析。
pub fn validate(raw: &str) -> Result<Url, PreviewError> {
    let url = Url::parse(raw.trim()).map_err(|_| PreviewError::InvalidUrl)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(PreviewError::UnsupportedScheme(url.scheme().to_string()));
    }

    let blocked = match url.host() {
        None => return Err(PreviewError::InvalidUrl),
        Some(Host::Domain(domain)) => is_blocked_domain(domain),
        Some(Host::Ipv4(ip)) => is_blocked_ipv4(ip),
        Some(Host::Ipv6(ip)) => is_blocked_ipv6(ip),
    };

    if blocked {
        return Err(PreviewError::BlockedHost);
    }
    Ok(url)
}

fn is_blocked_domain(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    domain == "localhost" || domain.ends_with(".localhost") || domain.ends_with(".local")
}

fn is_blocked_ipv4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    match a {
        0 | 10 | 127 => true,
        169 => b == 254,
        172 => (16..=31).contains(&b),
        192 => b == 168,
        _ => false,
    }
}

fn is_blocked_ipv6(ip: Ipv6Addr) -> bool {
    if ip.is_loopback() || ip.is_unspecified() {
        return true;
    }
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_blocked_ipv4(mapped);
    }
    let first = ip.segments()[0];
    // fe80::/10 链路本地，fc00::/7 唯一本地
    (first & 0xffc0) == 0xfe80 || (first & 0xfe00) == 0xfc00
}
