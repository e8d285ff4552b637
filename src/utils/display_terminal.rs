//! 터미널 출력 포맷팅
//!
//! 레지스트리/컨테이너 초기화 과정을 상자 형태로 보여줍니다.
//! 표준 출력은 계산 결과 전용이므로 모든 출력은 표준 에러로 보냅니다.

/// 상자 내부 너비 (문자 수)
const BOX_WIDTH: usize = 50;

/// 상자 제목의 세 줄(윗변, 제목, 아랫변)을 만듭니다.
///
/// 제목은 `BOX_WIDTH`칸 안에서 중앙 정렬되므로 세 줄의 문자 수가 같습니다.
/// 전각 문자나 이모지는 터미널에서 두 칸을 차지할 수 있어 눈으로는 어긋나 보일 수 있습니다.
pub fn boxed_title_lines(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);

    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Component Scan                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        eprintln!("{}", line);
    }
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Scanning package 'dao'
/// ```
pub fn print_step_start(step: u8, description: &str) {
    eprintln!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료와 처리된 항목 수를 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    eprintln!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 작업의 상태를 트리 형태로 표시합니다
///
/// ```text
///    ├─ MetierImpl: metier ← dao
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    eprintln!("   ├─ {}: {}", name, status);
}

/// 컨테이너 준비 완료 요약
///
/// # Arguments
///
/// * `providers` - 실제로 생성된 DataProvider 수 (지연 생성이므로 등록 수보다 적을 수 있음)
/// * `calculators` - 배선된 Calculator 수
pub fn print_final_summary(providers: usize, calculators: usize) {
    let total = providers + calculators;
    eprintln!();
    print_boxed_title("APPLICATION CONTEXT READY");
    eprintln!("   📦 DataProviders: {}", providers);
    eprintln!("   🔧 Calculators: {}", calculators);
    eprintln!("   🚀 Total Components: {}", total);
    eprintln!();
}

/// 전역 레지스트리에 로드된 등록 정보 수
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    eprintln!("   ├─ {} Registry: {} entries loaded", cache_type, count);
}
